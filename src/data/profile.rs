//! Profile seed data: identity, bio, timeline, skills, resume, contact.

use crate::components::icons::IconKind;

pub const NAME: &str = "PAVAN KISHORE N";
pub const TAGLINE: &str = "Aspiring Software Engineer | B.Tech Student at PES University | Passionate about ML & Full Stack Development.";

// Static asset path contracts.
pub const PROFILE_IMAGE: &str = "/images/profile.jpg";
pub const NAVBAR_IMAGE: &str = "/images/my-pic3.jpg";
pub const RESUME_PDF: &str = "/Pavan_Kishore_N_Resume.pdf";

/// Section anchors, in page order. The navbar renders one link per entry.
pub const NAV_ITEMS: &[&str] = &["home", "about", "projects", "resume", "contact"];

pub const BIO_PARAGRAPHS: &[&str] = &[
    "\u{1f30d} Hello, world! I'm Pavan Kishore N, immersed in the world of technology as a Computer Science undergrad at PES University. I thrive on tackling challenging tech puzzles and transforming them into exciting, user-centric solutions. \u{1f3af}",
    "From designing web applications like a job portal using the MERN stack to developing secure, interactive games using socket programming, my educational path is decorated with diverse and substantial projects. Alongside these, I prioritize mastering both frontend and backend technologies, ensuring a balanced skill set. \u{1f5a5}\u{fe0f}\u{1f6e0}\u{fe0f}",
    "Beyond academics, I've actively contributed to campus life. I was a member of the Kannada Koota in the Public Relations domain, honing my communication and outreach skills. I also participated in the WEAL Club, focusing on the Physical Fitness domain, promoting well-being within the community. \u{1f91d}\u{1f3cb}\u{fe0f}",
    "\u{1f468}\u{200d}\u{1f4bb}Certified in Python by Udemy and crowned in the top 10 at a prestigious hackathon, I am committed to evolving continually in this fast-paced tech sphere. My arsenal includes advanced proficiency in multiple programming languages and the aptitude to manage projects effectively.",
    "When I'm not coding, you might find me strategizing over a game of carrom, getting lost in diverse genres of music, or catching up on the latest movies. These interests help me maintain a creative perspective and a balanced approach to problem-solving. \u{1f3b6}\u{1f3ac}\u{265f}\u{fe0f}",
    "\u{1f31f}Are you on the lookout for someone passionate about developing innovative software solutions? Or perhaps, you're in need of a project collaborator? Let's make the digital world more intuitive together! Connect with me here on LinkedIn or take a look at my GitHub projects for more insights into my work.",
];

/// One entry on the education timeline.
#[derive(Clone, Copy, Debug)]
pub struct TimelineEntry {
    pub icon: IconKind,
    pub title: &'static str,
    pub institution: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        icon: IconKind::GraduationCap,
        title: "B.Tech in Computer Science & Engineering",
        institution: "PES University, Bangalore",
        date: "2022 \u{2013} 2026",
        description: "Focusing on core CS subjects, ML, App Development and Full Stack Development.",
    },
    TimelineEntry {
        icon: IconKind::GraduationCap,
        title: "Pre-University Course",
        institution: "SDC Independent PU College, KGF",
        date: "2022",
        description: "Completed 12th grade with focus on Physics, Chemistry, Mathematics, and Biology.",
    },
    TimelineEntry {
        icon: IconKind::GraduationCap,
        title: "Secondary School Leaving Certificate (SSLC)",
        institution: "BEML High School, KGF",
        date: "2020",
        description: "Completed 10th grade.",
    },
];

/// A skill category card in the About section.
#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: IconKind,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming Languages",
        icon: IconKind::Code,
        skills: &["C++", "JavaScript (ES6+)", "Java", "Python", "C", "SQL", "HTML5", "Dart"],
    },
    SkillCategory {
        title: "Technologies & Frameworks",
        icon: IconKind::Laptop,
        skills: &["React", "Node.js", "Express", "MongoDB (MERN)", "Flutter", "CSS3 (Tailwind)", "Bootstrap"],
    },
    SkillCategory {
        title: "Developer Tools",
        icon: IconKind::Tool,
        skills: &["Git & GitHub", "VS Code", "Vercel"],
    },
    SkillCategory {
        title: "Other Skills",
        icon: IconKind::Brain,
        skills: &["Problem Solving", "Project Management", "Communication", "Research", "Time Management"],
    },
];

/// One dated or described line inside a resume section.
#[derive(Clone, Copy, Debug)]
pub struct ResumeItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// A titled, icon-headed block of the resume card.
#[derive(Clone, Copy, Debug)]
pub struct ResumeSection {
    pub title: &'static str,
    pub icon: IconKind,
    pub items: &'static [ResumeItem],
}

pub const RESUME_SECTIONS: &[ResumeSection] = &[
    ResumeSection {
        title: "Education",
        icon: IconKind::GraduationCap,
        items: &[
            ResumeItem {
                title: "Bachelor of Technology, CSE",
                subtitle: Some("PES University, Bangalore (2022 - Present)"),
                description: Some("CGPA: 7.84"),
            },
            ResumeItem {
                title: "Class XII (HSC)",
                subtitle: Some("2021 - 2022"),
                description: Some("Percentage: 90.84%"),
            },
            ResumeItem {
                title: "Class X (SSC)",
                subtitle: Some("2020"),
                description: Some("Percentage: 86.08%"),
            },
        ],
    },
    ResumeSection {
        title: "Project Work",
        icon: IconKind::Briefcase,
        items: &[
            ResumeItem {
                title: "Career Crafter - Job Portal",
                subtitle: Some("MERN Stack (2024)"),
                description: Some("Developed a full-stack job portal focused on UI/UX and database management."),
            },
            ResumeItem {
                title: "Vanilla JS Piano",
                subtitle: Some("HTML, CSS, JavaScript(2025)"),
                description: Some("A dynamic piano application built with Vanilla JavaScript, capable of playing melodies like Fur Elise."),
            },
            ResumeItem {
                title: "Hotel Management System",
                subtitle: Some("C, Data Structures (2024)"),
                description: Some("Managed hotel operations using C and linked lists."),
            },
        ],
    },
    ResumeSection {
        title: "Skills",
        icon: IconKind::Code,
        items: &[
            ResumeItem {
                title: "Programming Languages",
                subtitle: None,
                description: Some("Python, C, C++, Java, SQL, JavaScript, Dart"),
            },
            ResumeItem {
                title: "Technologies",
                subtitle: None,
                description: Some("MERN Stack (MongoDB, Express, React, Node.js), Flutter"),
            },
            ResumeItem {
                title: "Tools",
                subtitle: None,
                description: Some("Git, GitHub"),
            },
            ResumeItem {
                title: "Other Skills",
                subtitle: None,
                description: Some("Problem Solving, Research, Project management, Communication, Time management"),
            },
        ],
    },
    ResumeSection {
        title: "Languages Known",
        icon: IconKind::Globe,
        items: &[
            ResumeItem {
                title: "Fluent / Proficient",
                subtitle: None,
                description: Some("English, Kannada, Telugu, Tamil"),
            },
            ResumeItem {
                title: "Understanding Only",
                subtitle: None,
                description: Some("Hindi (Understandable)"),
            },
        ],
    },
    ResumeSection {
        title: "Certifications",
        icon: IconKind::Award,
        items: &[
            ResumeItem {
                title: "Udemy Certified Python Developer",
                subtitle: None,
                description: None,
            },
            ResumeItem {
                title: "Full Stack Web Development (Udemy)",
                subtitle: None,
                description: None,
            },
            ResumeItem {
                title: "HackerRank Problem Solving (C) - Intermediate/Basic",
                subtitle: None,
                description: None,
            },
            ResumeItem {
                title: "Hackathon Top 10 Winning Certification",
                subtitle: None,
                description: None,
            },
        ],
    },
];

/// A contact method card (email, phone, location).
#[derive(Clone, Copy, Debug)]
pub struct ContactDetail {
    pub icon: IconKind,
    pub title: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: IconKind::Envelope,
        title: "Email",
        value: "pavankishore9304@gmail.com",
        href: Some("mailto:pavankishore9304@gmail.com"),
    },
    ContactDetail {
        icon: IconKind::Phone,
        title: "Phone",
        value: "(+91) 8431010385",
        href: Some("tel:+918431010385"),
    },
    ContactDetail {
        icon: IconKind::MapPin,
        title: "Location",
        value: "Bangalore, India",
        href: None,
    },
];

/// An outbound profile link rendered as a bare icon.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub icon: IconKind,
    pub title: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: IconKind::GitHub,
        title: "GitHub",
        href: "https://github.com/pavankishore9304",
    },
    SocialLink {
        icon: IconKind::LinkedIn,
        title: "LinkedIn",
        href: "https://linkedin.com/in/pavan-kishore-n",
    },
    SocialLink {
        icon: IconKind::Envelope,
        title: "Email",
        href: "mailto:pavankishore9304@gmail.com",
    },
];

pub const CONTACT_BLURB: &str = "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your visions.";
