//! Hand-authored content rendered by the page sections.

pub const OWNER_NAME: &str = "Bathula Ganesh";
pub const HERO_SUBTITLE: &str = "Building scalable systems & solving problems with impact. Passionate about clean code, system design, and delivering exceptional user experiences.";
pub const HERO_BACKGROUND: &str = "/hero-background.jpg";
pub const GITHUB_PROFILE: &str = "https://github.com/Ganesh-a0576";
pub const LINKEDIN_PROFILE: &str = "https://www.linkedin.com/in/bathulaganesh576/";

/// Project cards only list this many key features.
pub const MAX_FEATURES: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy)]
pub struct Specialty {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub accent: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

impl Project {
    pub fn key_features(&self) -> impl Iterator<Item = &'static str> {
        self.features.iter().copied().take(MAX_FEATURES)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SdlcPhase {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub practices: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CultureHighlight {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: GITHUB_PROFILE,
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_PROFILE,
        icon: "devicon-linkedin-plain",
    },
];

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Languages",
        icon: "extra-code",
        color: "from-blue-500 to-purple-600",
        skills: &[
            Skill { name: "C++", level: 90 },
            Skill { name: "Python", level: 85 },
            Skill { name: "JavaScript/TypeScript", level: 80 },
            Skill { name: "Java", level: 80 },
        ],
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        icon: "extra-layers",
        color: "from-purple-500 to-pink-600",
        skills: &[
            Skill { name: "React", level: 95 },
            Skill { name: "Node.js", level: 88 },
            Skill { name: "Express", level: 85 },
            Skill { name: "Next.js", level: 82 },
        ],
    },
    SkillCategory {
        title: "Databases & Cloud",
        icon: "extra-database",
        color: "from-green-500 to-blue-600",
        skills: &[
            Skill { name: "MongoDB", level: 85 },
            Skill { name: "PostgreSQL", level: 80 },
            Skill { name: "AWS", level: 78 },
            Skill { name: "Firebase", level: 82 },
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        icon: "extra-settings",
        color: "from-orange-500 to-red-600",
        skills: &[
            Skill { name: "Git", level: 90 },
            Skill { name: "Docker", level: 75 },
            Skill { name: "CI/CD", level: 70 },
            Skill { name: "Vercel", level: 85 },
        ],
    },
    SkillCategory {
        title: "Core Engineering",
        icon: "extra-brain",
        color: "from-teal-500 to-green-600",
        skills: &[
            Skill {
                name: "Data Structures & Algorithms",
                level: 92,
            },
            Skill {
                name: "System Design",
                level: 85,
            },
            Skill {
                name: "SDLC",
                level: 88,
            },
            Skill {
                name: "Problem Solving",
                level: 95,
            },
        ],
    },
];

pub static SPECIALTIES: [Specialty; 6] = [
    Specialty {
        name: "Web Dev",
        icon: "extra-globe",
        color: "text-blue-400",
    },
    Specialty {
        name: "Security",
        icon: "extra-shield",
        color: "text-green-400",
    },
    Specialty {
        name: "Version Control",
        icon: "extra-git-branch",
        color: "text-orange-400",
    },
    Specialty {
        name: "CLI Tools",
        icon: "extra-terminal",
        color: "text-purple-400",
    },
    Specialty {
        name: "Performance",
        icon: "extra-cpu",
        color: "text-red-400",
    },
    Specialty {
        name: "Optimization",
        icon: "extra-zap",
        color: "text-yellow-400",
    },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "URL Shortener",
        description: "Fast & minimal link shortening system with real-time analytics, custom domains, and QR code generation. Built for scale with caching and rate limiting.",
        icon: "extra-zap",
        color: "from-blue-500 to-purple-600",
        accent: "bg-gradient-to-br from-blue-500/20 to-purple-600/20",
        tech: &["React", "Node.js", "MongoDB", "Redis", "AWS"],
        features: &[
            "Custom short URLs & domains",
            "Real-time click analytics",
            "QR code generation",
            "Rate limiting & caching",
            "REST API with authentication",
        ],
        github: "https://github.com",
        demo: "https://example.com",
    },
    Project {
        title: "Qurda Search Engine",
        description: "Lightweight search engine with custom indexing algorithm, ranking system, and real-time suggestions. Implements TF-IDF scoring and web crawling.",
        icon: "extra-search",
        color: "from-green-500 to-teal-600",
        accent: "bg-gradient-to-br from-green-500/20 to-teal-600/20",
        tech: &["Python", "FastAPI", "PostgreSQL", "React", "Docker"],
        features: &[
            "Custom web crawler",
            "TF-IDF ranking algorithm",
            "Real-time search suggestions",
            "Distributed indexing",
            "RESTful search API",
        ],
        github: "https://github.com",
        demo: "https://example.com",
    },
    Project {
        title: "E-Commerce Platform",
        description: "Full-stack MERN e-commerce platform with secure payments, inventory management, and admin dashboard. Optimized for performance and scalability.",
        icon: "extra-cart",
        color: "from-purple-500 to-pink-600",
        accent: "bg-gradient-to-br from-purple-500/20 to-pink-600/20",
        tech: &["React", "Node.js", "MongoDB", "Stripe", "AWS S3"],
        features: &[
            "Secure payment processing",
            "Inventory management",
            "Admin dashboard",
            "Order tracking system",
            "Product recommendations",
        ],
        github: "https://github.com",
        demo: "https://example.com",
    },
];

pub static MORE_PROJECTS: [&str; 4] = [
    "Distributed Chat System",
    "ML Recommendation Engine",
    "Blockchain Voting App",
    "Real-time Collaboration Tool",
];

pub static SDLC_PHASES: [SdlcPhase; 6] = [
    SdlcPhase {
        title: "Requirements",
        icon: "extra-file-text",
        color: "from-blue-500 to-cyan-500",
        description: "Gather stakeholder needs, define user stories, and establish clear acceptance criteria",
        practices: &[
            "User Story Mapping",
            "Stakeholder Interviews",
            "Technical Requirements",
        ],
    },
    SdlcPhase {
        title: "Design",
        icon: "extra-palette",
        color: "from-purple-500 to-pink-500",
        description: "Create system architecture, design patterns, and user experience flows",
        practices: &["System Architecture", "API Design", "Database Schema"],
    },
    SdlcPhase {
        title: "Development",
        icon: "extra-code",
        color: "from-green-500 to-teal-500",
        description: "Write clean, maintainable code following best practices and coding standards",
        practices: &["Clean Code", "Code Reviews", "Version Control"],
    },
    SdlcPhase {
        title: "Testing",
        icon: "extra-test-tube",
        color: "from-orange-500 to-red-500",
        description: "Comprehensive testing strategy including unit, integration, and E2E testing",
        practices: &["Unit Testing", "Integration Tests", "Test Automation"],
    },
    SdlcPhase {
        title: "Deployment",
        icon: "extra-rocket",
        color: "from-indigo-500 to-purple-500",
        description: "Automated CI/CD pipelines for reliable and consistent deployments",
        practices: &[
            "CI/CD Pipelines",
            "Environment Management",
            "Release Strategy",
        ],
    },
    SdlcPhase {
        title: "Maintenance",
        icon: "extra-settings",
        color: "from-teal-500 to-green-500",
        description: "Monitor performance, fix bugs, and implement feature enhancements",
        practices: &["Performance Monitoring", "Bug Fixes", "Feature Updates"],
    },
];

pub static PRINCIPLES: [Principle; 4] = [
    Principle {
        title: "Ownership & Impact",
        icon: "extra-target",
        description: "Take end-to-end responsibility for features and their business impact",
    },
    Principle {
        title: "Team Collaboration",
        icon: "extra-users",
        description: "Work effectively in cross-functional teams with clear communication",
    },
    Principle {
        title: "Quality First",
        icon: "extra-shield",
        description: "Write clean, testable code with proper error handling and security",
    },
    Principle {
        title: "Scalability Mindset",
        icon: "extra-bar-chart",
        description: "Design systems that can grow and adapt to changing requirements",
    },
];

pub static CULTURE_HIGHLIGHTS: [CultureHighlight; 3] = [
    CultureHighlight {
        title: "Growth Mindset",
        emoji: "🧠",
        description: "Continuous learning, embracing challenges, and adapting to new technologies",
    },
    CultureHighlight {
        title: "Diversity & Inclusion",
        emoji: "🌍",
        description: "Building inclusive products and fostering diverse perspectives in teams",
    },
    CultureHighlight {
        title: "Customer Obsession",
        emoji: "🎯",
        description: "Focus on user experience and delivering value that solves real problems",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES.iter() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is over 100%", skill.name);
            }
        }
    }

    #[test]
    fn test_project_cards_cap_features() {
        for project in PROJECTS.iter() {
            let shown = project.key_features().collect::<Vec<_>>();
            assert_eq!(shown.len(), project.features.len().min(MAX_FEATURES));
            assert_eq!(shown[0], project.features[0]);
        }
        assert!(!PROJECTS[0].key_features().any(|f| f == "REST API with authentication"));
    }

    #[test]
    fn test_titles_unique() {
        let projects = PROJECTS.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(projects.len(), PROJECTS.len());
        let phases = SDLC_PHASES.iter().map(|p| p.title).collect::<HashSet<_>>();
        assert_eq!(phases.len(), SDLC_PHASES.len());
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        let links = SOCIAL_LINKS
            .iter()
            .map(|l| l.href)
            .chain(PROJECTS.iter().flat_map(|p| [p.github, p.demo]));
        for href in links {
            assert!(href.starts_with("https://"), "{href} is not absolute");
        }
    }
}
