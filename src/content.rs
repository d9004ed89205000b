//! Copy and data tables rendered by the page sections.

pub const OWNER_FIRST_NAME: &str = "Aryan";
pub const OWNER_LAST_NAME: &str = "Yadav";
pub const OWNER_NAME: &str = "Aryan Yadav";
pub const OWNER_EMAIL: &str = "ay6033756@gmail.com";
pub const OWNER_LOCATION: &str = "India";
pub const GITHUB_URL: &str = "http://github.com/aryan00756";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/aryan0203";

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", icon: "⌥", href: GITHUB_URL },
    SocialLink { label: "LinkedIn", icon: "in", href: LINKEDIN_URL },
];

pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2023-Present",
        title: "Engineering Student",
        description: "Pursuing Engineering with focus on AI/ML and Software Development",
        icon: "🎓",
    },
    TimelineEntry {
        year: "2023",
        title: "Frontend Development",
        description: "Mastered modern web development technologies",
        icon: "💻",
    },
    TimelineEntry {
        year: "2024",
        title: "Computer Vision",
        description: "Explored computer vision applications and implementations",
        icon: "👁",
    },
    TimelineEntry {
        year: "2025",
        title: "ML Journey Begins",
        description: "Started deep dive into Machine Learning and Generative AI",
        icon: "🧠",
    },
    TimelineEntry {
        year: "2026",
        title: "Gen AI",
        description: "Exploring Generative AI models, LLMs and building intelligent applications",
        icon: "🧠",
    },
];

/// Accent used for icon badges and card borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Neural,
    Secondary,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Neural => "accent-neural",
            Accent::Secondary => "accent-secondary",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Machine Learning & AI",
        icon: "🧠",
        accent: Accent::Primary,
        skills: &[
            Skill { name: "Python", level: 90 },
            Skill { name: "TensorFlow", level: 85 },
            Skill { name: "Generative AI", level: 80 },
            Skill { name: "Deep Learning", level: 75 },
        ],
    },
    SkillCategory {
        title: "Programming Languages",
        icon: "⌨",
        accent: Accent::Neural,
        skills: &[
            Skill { name: "Java", level: 85 },
            Skill { name: "Python", level: 90 },
            Skill { name: "JavaScript", level: 80 },
            Skill { name: "TypeScript", level: 75 },
        ],
    },
    SkillCategory {
        title: "Full Stack Development",
        icon: "🌐",
        accent: Accent::Secondary,
        skills: &[
            Skill { name: "React", level: 85 },
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Next.js", level: 75 },
            Skill { name: "Express", level: 80 },
        ],
    },
    SkillCategory {
        title: "Computer Vision",
        icon: "👁",
        accent: Accent::Primary,
        skills: &[
            Skill { name: "OpenCV", level: 80 },
            Skill { name: "Face Recognition", level: 85 },
            Skill { name: "Gesture Detection", level: 75 },
            Skill { name: "Image Processing", level: 80 },
        ],
    },
    SkillCategory {
        title: "Data & Algorithms",
        icon: "🗄",
        accent: Accent::Neural,
        skills: &[
            Skill { name: "Data Structures", level: 85 },
            Skill { name: "Algorithms", level: 80 },
            Skill { name: "MongoDB", level: 75 },
            Skill { name: "SQL", level: 80 },
        ],
    },
    SkillCategory {
        title: "Tools & Frameworks",
        icon: "⚡",
        accent: Accent::Secondary,
        skills: &[
            Skill { name: "Git", level: 85 },
            Skill { name: "Docker", level: 70 },
            Skill { name: "AWS", level: 65 },
            Skill { name: "Firebase", level: 75 },
        ],
    },
];

pub const TECHNOLOGIES: &[&str] = &[
    "Python", "C", "Java", "HTML", "CSS", "JavaScript", "SQL", "TensorFlow", "OpenCV",
    "Scikit-learn", "Pandas", "Git", "Github", "Numpy", "Matplotlib",
];

pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Chatbot Development",
        icon: "🤖",
        description: "Custom AI chatbots powered by advanced language models for customer service, support, and engagement.",
        features: &[
            "GPT-powered conversational AI",
            "Natural language understanding",
            "Multi-platform integration",
            "Custom training on your data",
        ],
        accent: Accent::Primary,
    },
    Service {
        title: "Smart System Integrations",
        icon: "⚡",
        description: "Intelligent automation solutions that streamline workflows and enhance business operations.",
        features: &[
            "ML-powered automation",
            "Real-time data processing",
            "API integrations",
            "Performance optimization",
        ],
        accent: Accent::Neural,
    },
    Service {
        title: "Frontend Web Services",
        icon: "🌐",
        description: "Modern, responsive web applications built with cutting-edge technologies and best practices.",
        features: &[
            "React development",
            "Responsive UI/UX design",
            "HTML, CSS & JavaScript",
            "Performance optimization",
        ],
        accent: Accent::Secondary,
    },
];

pub struct Expertise {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const ADDITIONAL_EXPERTISE: &[Expertise] = &[
    Expertise {
        title: "Machine Learning Models",
        icon: "🧠",
        description: "Custom ML solutions for classification, prediction, and data analysis",
    },
    Expertise {
        title: "Computer Vision",
        icon: "👁",
        description: "Image recognition, face detection, and gesture-based applications",
    },
    Expertise {
        title: "API Development",
        icon: "⌨",
        description: "Scalable RESTful APIs and microservices architecture",
    },
];

pub struct Project {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub accent: Accent,
    pub demo_url: &'static str,
    pub source_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "GPT-2 Chatbot",
        icon: "🧠",
        description: "An intelligent conversational AI system built using GPT-2 architecture, capable of understanding context and providing meaningful responses across various domains.",
        technologies: &["Python", "Transformers", "PyTorch", "Flask", "React"],
        features: &[
            "Context-aware conversations",
            "Multi-turn dialogue support",
            "Custom fine-tuning capabilities",
            "Web interface integration",
        ],
        accent: Accent::Primary,
        demo_url: "#",
        source_url: "#",
    },
    Project {
        title: "Face Recognition & Gesture Detection",
        icon: "👁",
        description: "Advanced computer vision system combining face recognition and real-time gesture detection for interactive applications and security systems.",
        technologies: &["Python", "OpenCV", "MediaPipe", "TensorFlow", "NumPy"],
        features: &[
            "Real-time face recognition",
            "Hand gesture classification",
            "Multi-person tracking",
            "Privacy-focused design",
        ],
        accent: Accent::Neural,
        demo_url: "#",
        source_url: "#",
    },
    Project {
        title: "Credit Card Fraud Detection",
        icon: "🛡",
        description: "Machine learning-powered anomaly detection system that identifies fraudulent transactions with high accuracy using advanced algorithms.",
        technologies: &["Python", "Scikit-learn", "Pandas", "XGBoost", "Streamlit"],
        features: &[
            "Real-time fraud detection",
            "Ensemble learning models",
            "Imbalanced data handling",
            "Interactive dashboard",
        ],
        accent: Accent::Secondary,
        demo_url: "#",
        source_url: "#",
    },
    Project {
        title: "Movie Recommendation System",
        icon: "🎬",
        description: "Content-based filtering system that analyzes user preferences and movie characteristics to provide personalized recommendations.",
        technologies: &["Python", "Pandas", "Scikit-learn", "NLTK", "Streamlit"],
        features: &[
            "Content-based filtering",
            "Similarity calculations",
            "User preference analysis",
            "Interactive recommendations",
        ],
        accent: Accent::Primary,
        demo_url: "#",
        source_url: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} in {}", skill.name, category.title);
            }
        }
    }

    #[test]
    fn project_titles_are_unique() {
        let mut titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PROJECTS.len());
    }
}
