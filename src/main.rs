use log::info;
use yew::prelude::*;

mod config;
mod contact;
mod content;
mod reveal;
mod scroll;
mod sections;
mod toast;

use reveal::REVEAL_CSS;
use sections::{About, Contact, Footer, Hero, Navigation, Projects, Services, Skills, TechyCursor};
use toast::ToastProvider;

const GLOBAL_CSS: &str = r#"
:root {
    --background: #0a0c14;
    --foreground: #e2e8f0;
    --muted: #94a3b8;
    --border: #1e293b;
    --primary: #38bdf8;
    --neural: #a78bfa;
    --secondary: #34d399;
    --gradient-primary: linear-gradient(135deg, #38bdf8, #818cf8);
    --gradient-neural: linear-gradient(135deg, #a78bfa, #f472b6);
}
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body {
    background: var(--background);
    color: var(--foreground);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    cursor: none;
    overflow-x: hidden;
}
@media (hover: none) { body { cursor: auto; } }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 5rem 0; background: linear-gradient(to bottom, var(--background), rgba(20, 24, 36, 0.5)); }
.section--alt { background: linear-gradient(to bottom, rgba(20, 24, 36, 0.5), var(--background)); }
.section-header { text-align: center; margin-bottom: 4rem; }
.section-title { font-size: clamp(2rem, 5vw, 3.75rem); font-weight: 700; margin-bottom: 1.5rem; }
.section-lead { font-size: 1.25rem; color: var(--muted); max-width: 48rem; margin: 0 auto; }
.subsection-title { font-size: 1.5rem; font-weight: 700; margin-bottom: 2rem; }
.centered { text-align: center; }
.muted { color: var(--muted); }
.small { font-size: 0.875rem; }
.narrow { max-width: 56rem; margin: 0 auto; }
.text-gradient-primary, .text-gradient-neural {
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.text-gradient-primary { background-image: var(--gradient-primary); }
.text-gradient-neural { background-image: var(--gradient-neural); }
.accent-text-primary { color: var(--primary); font-weight: 600; }
.accent-text-neural { color: var(--neural); font-weight: 600; }
.card {
    background: rgba(20, 24, 36, 0.5);
    backdrop-filter: blur(4px);
    border: 1px solid rgba(56, 189, 248, 0.1);
    border-radius: 0.75rem;
    padding: 1.5rem;
}
.card--soft { background: rgba(20, 24, 36, 0.3); }
.card__title { font-size: 1.25rem; font-weight: 700; margin: 1rem 0 0.75rem; }
.card-grid { display: grid; gap: 2rem; }
.card-grid--2 { grid-template-columns: repeat(2, 1fr); }
.card-grid--3 { grid-template-columns: repeat(3, 1fr); }
.hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; }
.hover-lift:hover { transform: translateY(-4px); box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3); }
.icon-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.75rem;
    border-radius: 0.5rem;
    font-size: 1.5rem;
    border: 1px solid transparent;
}
.accent-primary { color: var(--primary); border-color: rgba(56, 189, 248, 0.2); background: rgba(56, 189, 248, 0.05); }
.accent-neural { color: var(--neural); border-color: rgba(167, 139, 250, 0.2); background: rgba(167, 139, 250, 0.05); }
.accent-secondary { color: var(--secondary); border-color: rgba(52, 211, 153, 0.2); background: rgba(52, 211, 153, 0.05); }
.pill {
    font-size: 0.75rem;
    color: var(--primary);
    background: rgba(56, 189, 248, 0.1);
    padding: 0.25rem 0.5rem;
    border-radius: 999px;
}
.bullet-list { list-style: none; display: flex; flex-direction: column; gap: 0.5rem; }
.bullet-list li { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: var(--muted); }
.bullet-list li::before {
    content: '';
    width: 0.375rem;
    height: 0.375rem;
    border-radius: 50%;
    background: var(--primary);
    flex-shrink: 0;
}
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.75rem 1.5rem;
    border-radius: 0.5rem;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
    transition: all 0.3s ease;
}
.btn-primary { background: var(--gradient-primary); color: var(--background); border: none; }
.btn-primary:hover { opacity: 0.9; }
.btn-outline { background: transparent; color: var(--primary); border: 1px solid var(--primary); }
.btn-outline:hover { background: var(--primary); color: var(--background); }
.btn-block { width: 100%; }
.glow-primary { box-shadow: 0 0 24px rgba(56, 189, 248, 0.25); }
.icon-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.5rem;
    border: none;
    background: transparent;
    color: var(--muted);
    text-decoration: none;
    cursor: pointer;
    transition: all 0.3s ease;
}
.icon-btn:hover { color: var(--primary); background: rgba(56, 189, 248, 0.1); }
.icon-btn--outline { border: 1px solid rgba(56, 189, 248, 0.2); width: 3rem; height: 3rem; }
.glow-panel {
    background: radial-gradient(circle at top, rgba(56, 189, 248, 0.12), transparent 70%);
    border-radius: 1rem;
    padding: 2rem;
    max-width: 42rem;
    margin: 0 auto;
}
.cta { margin-top: 4rem; text-align: center; }
.cta__title { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.cta .btn { margin-top: 1.5rem; }
.animate-float { animation: float 4s ease-in-out infinite; }
.animate-pulse { animation: pulse 2s ease-in-out infinite; }
.animate-pulse-glow { animation: pulseGlow 3s ease-in-out infinite; }
@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-12px); }
}
@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}
@keyframes pulseGlow {
    0%, 100% { opacity: 0.2; }
    50% { opacity: 0.4; }
}
@media (max-width: 1024px) {
    .card-grid--2, .card-grid--3 { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 640px) {
    .card-grid--2, .card-grid--3 { grid-template-columns: 1fr; }
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <ToastProvider>
            <style>{ GLOBAL_CSS }{ REVEAL_CSS }</style>
            <TechyCursor />
            <Navigation />
            <main>
                <Hero />
                <About />
                <Skills />
                <Services />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </ToastProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
