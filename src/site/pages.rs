//! Page content.

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

pub const PROJECTS_INTRO: &str =
    "Companies I've built, products I've led, and teams I've been part of.";

pub const PROJECTS: &[Project] = &[
    Project {
        name: "dex",
        description: "A unified data platform that helps organizations turn scattered data into \
            reliable insights. From ingestion to orchestration, governance to BI, \
            fully managed in the cloud.",
        href: "https://www.dexlabs.io/",
        label: "dexlabs.io",
    },
    Project {
        name: "Patronos Endowment Fund",
        description: "One of Brazil's first endowment funds supporting education and innovation \
            at Unicamp.",
        href: "https://www.patronos.org/",
        label: "patronos.org",
    },
    Project {
        name: "Kartel Racing",
        description: "Amateur go-karting team competing in endurance races. 2023 Brazilian \
            National Champion in the amateur endurance category.",
        href: "https://www.instagram.com/kartelracingoficial/",
        label: "instagram.com",
    },
    Project {
        name: "AWS Global Accelerator",
        description: "Global network optimization service that improves performance for internet \
            applications.",
        href: "https://aws.amazon.com/global-accelerator/",
        label: "aws.amazon.com",
    },
    Project {
        name: "Rappi",
        description: "Latin America's super app for on-demand delivery.",
        href: "https://www.rappi.com.br/",
        label: "rappi.com",
    },
    Project {
        name: "McKinsey & Company",
        description: "Global management consulting firm.",
        href: "https://www.mckinsey.com/",
        label: "mckinsey.com",
    },
    Project {
        name: "Beehive",
        description: "Enterprise-grade project management for transformations, turnarounds, and \
            organizational change.",
        href: "https://beehive.solutions/",
        label: "beehive.solutions",
    },
];

pub const ABOUT_HEADLINE: &str = "Builder, founder, learner. Still chasing hard problems.";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I've been drawn to making things work for as long as I can remember. When I was in \
     college, I designed race cars and earned a spot on Scuderia Toro Rosso's F1 \
     aerodynamics team.",
    "That engineering foundation led me to McKinsey, where I spent three years solving \
     complex problems across Brazil and Ghana. But I wanted to build products, not just \
     advise on them—so I moved to Bogotá to join Rappi, one of Latin America's \
     fastest-growing startups. Leading product development across 9 countries, I saw \
     millions of people use what we built daily. That's when I fell in love with the craft \
     of product management.",
    "I wanted to go deeper, so I went to Harvard Business School. There, I immersed myself \
     in entrepreneurship and technology—joining the I-Lab Venture Program, learning from \
     founders who'd scaled companies, and clarifying what I wanted to build. I joined AWS \
     in Seattle as a Senior Technical Product Manager, where I finally understood what \
     world-class product management looks like: obsessing over customers, moving fast \
     without compromising craft, and measuring what matters.",
    "Today, I'm Co-founder and CEO of dex, a unified data platform that solves one of \
     tech's hardest problems: turning messy, scattered data into reliable insights. We \
     handle everything from ingestion and transformation to orchestration, governance, and \
     BI—fully managed in the cloud so teams can focus on decisions, not infrastructure.",
    "Since 2019, I've also co-founded and run Patronos Endowment Fund, one of Brazil's \
     first endowment funds supporting education at Unicamp. We fund top talent and \
     projects tackling humanity's biggest challenges—like climate change, AI, gene \
     editing, and space exploration. I believe education is the foundation for \
     prosperous, sustainable societies.",
    "I'm still learning, still building, and still chasing hard problems worth solving.",
    "Outside work, I race go-karts (2023 Brazilian National Champion), scuba dive, hike, \
     and tinker with side projects. I believe in open-source, in the beauty of technology, \
     and in the freedom to create.",
];

/// Which network a social link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    LinkedIn,
    GitHub,
    Instagram,
    Email,
}

pub struct SocialLink {
    pub social: Social,
    pub label: &'static str,
    pub href: &'static str,
}

/// Links listed under the about text. The email entry is set apart from the rest.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        social: Social::LinkedIn,
        label: "Follow on LinkedIn",
        href: "https://www.linkedin.com/in/gustavo-beltrami/",
    },
    SocialLink {
        social: Social::GitHub,
        label: "Follow on GitHub",
        href: "https://github.com/gustavo-beltrami",
    },
    SocialLink {
        social: Social::Instagram,
        label: "Follow on Instagram",
        href: "https://www.instagram.com/gustavo_mbeltrami/",
    },
    SocialLink {
        social: Social::Email,
        label: "me@gbeltrami.com",
        href: "mailto:me@gbeltrami.com",
    },
];

pub const NOT_FOUND: &str = "This page doesn't exist. Press Ctrl+K to find your way.";
