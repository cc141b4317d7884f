#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Marker used in seed data where a link or image slot is intentionally
/// blank. Filtered out of galleries and never rendered as a link.
pub const PLACEHOLDER_LINK: &str = "#";

/// A portfolio project record. Identity is `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Structured text for the detail modal; see [`crate::util::markup`].
    pub detailed_description: &'static str,
    /// Main image for the card.
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    /// Additional images for the modal gallery.
    pub screenshots: &'static [&'static str],
}

impl Project {
    /// Look up a project by id.
    pub fn find(id: u32) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    /// The modal gallery image list: the card image followed by the
    /// screenshots, deduplicated in first-seen order, with placeholder and
    /// empty entries removed.
    pub fn gallery_images(&self) -> Vec<&'static str> {
        let mut images = Vec::new();
        for src in std::iter::once(self.image_url).chain(self.screenshots.iter().copied()) {
            if src.is_empty() || src == PLACEHOLDER_LINK {
                continue;
            }
            if !images.contains(&src) {
                images.push(src);
            }
        }
        images
    }

    /// Live demo link, if one is set and not a placeholder.
    pub fn live_link(&self) -> Option<&'static str> {
        self.live_url.filter(|url| !url.is_empty() && *url != PLACEHOLDER_LINK)
    }

    /// Repository link, if one is set and not a placeholder.
    pub fn repo_link(&self) -> Option<&'static str> {
        self.github_url.filter(|url| !url.is_empty() && *url != PLACEHOLDER_LINK)
    }

    pub fn has_links(&self) -> bool {
        self.live_link().is_some() || self.repo_link().is_some()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Career Crafter - Job Portal",
        description: "Developed a full-stack job portal emphasizing UI/UX, database management, and responsive design.",
        detailed_description: "Career Crafter is a comprehensive job portal built using the MERN stack (MongoDB, Express.js, React, Node.js). The project focused on creating an intuitive user interface for job seekers. Key features include user authentication, profile management, job posting and application workflows and an admin dashboard. Emphasis was placed on database schema design for efficiency and scalability, along with implementing RESTful APIs for seamless front-end and back-end communication. The front-end was built with React, utilizing components and state management for a dynamic user experience.\n\n### Key Features\n\n*   \u{27a4} Beautiful UI/UX \u{2013} Fully responsive, modern, and user-friendly interface.\n*   \u{27a4} Jobs Page \u{2013} Displays job listings with category, location, and experience filters.\n*   \u{27a4} Companies Page \u{2013} Showcases company profiles and job openings.\n*   \u{27a4} Profile Page \u{2013} Allows users to create, update, and manage their profiles.\n*   \u{27a4} About Page \u{2013} Provides an overview of the platform's mission and goals.\n*   \u{27a4} Application System \u{2013} Users can apply for jobs.\n*   \u{27a4} Real-time Updates \u{2013} Sends notifications for job applications and approvals.\n\n### Technologies Used\n\n*   React.js \u{2013} Frontend library for building dynamic and interactive UI.\n*   Node.js \u{2013} Backend runtime for handling server-side operations efficiently.\n*   Express.js \u{2013} Lightweight framework for building fast and scalable REST APIs.\n*   MongoDB \u{2013} NoSQL database for managing job listings, users, and applications.\n*   CSS  \u{2013} Styles the UI with responsive layouts and animations.\n",
        image_url: "/images/jobplatform.png",
        tags: &["React", "Node.js", "Express", "MongoDB", "CSS", "MERN", "Full-Stack"],
        live_url: None,
        github_url: Some("https://github.com/pavankishore9304/job_portal_react_node"),
        screenshots: &[
            "/images/jobplatform.png",
            "/images/login.png",
            "/images/jobs.png",
            "/images/companies.png",
        ],
    },
    Project {
        id: 2,
        title: "Vanilla JS Piano",
        description: "A dynamic piano application built with Vanilla JavaScript, capable of playing melodies like Fur Elise.",
        detailed_description: "This project showcases the power of Vanilla JavaScript to create interactive user interfaces. It features a clickable piano keyboard that plays corresponding notes. The application includes logic to play pre-programmed melodies like Beethoven's Fur Elise, demonstrating event handling, DOM manipulation, and audio integration using the Web Audio API or HTML5 Audio elements.",
        image_url: "/images/piano.png",
        tags: &["JavaScript", "HTML5", "CSS3", "Web Audio API"],
        live_url: None,
        github_url: Some(PLACEHOLDER_LINK),
        screenshots: &["/images/piano.png", "/images/furelisa.png"],
    },
    Project {
        id: 3,
        title: "Hotel Management System",
        description: "Designed a command-line hotel management system in C utilizing linked lists for efficient data handling.",
        detailed_description: "A console-based application developed in C to simulate the core operations of a hotel management system. This project heavily utilized fundamental data structures, particularly linked lists, to manage guest records, room availability, bookings, and check-ins/check-outs. The focus was on efficient memory management and algorithmic logic within the constraints of the C language. It provides functionalities like adding new guests, searching for guest records, displaying room status, and managing reservations, checkin and checkout etc.",
        image_url: "/images/dsa.png",
        tags: &["C", "Data Structures", "Linked Lists", "CLI"],
        live_url: None,
        github_url: Some("https://github.com/pavankishore9304/Hotel_Management_System"),
        screenshots: &["/images/dsa1.png", "/images/dsa2.png", "/images/dsa3.png"],
    },
];
