use super::*;

// =============================================================
// Seed data shape
// =============================================================

#[test]
fn project_ids_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate project id {}", a.id);
        }
    }
}

#[test]
fn find_resolves_every_seed_project() {
    for project in PROJECTS {
        assert_eq!(Project::find(project.id).map(|p| p.id), Some(project.id));
    }
    assert!(Project::find(999).is_none());
}

// =============================================================
// Gallery construction
// =============================================================

#[test]
fn gallery_has_no_duplicates_and_preserves_order() {
    for project in PROJECTS {
        let gallery = project.gallery_images();
        for (i, a) in gallery.iter().enumerate() {
            for b in &gallery[i + 1..] {
                assert_ne!(a, b, "duplicate gallery image in {}", project.title);
            }
        }
        // The card image is first when it is a real image.
        assert_eq!(gallery.first().copied(), Some(project.image_url));
    }
}

#[test]
fn gallery_dedupes_card_image_repeated_in_screenshots() {
    // Seed project 1 repeats its card image as the first screenshot.
    let project = Project::find(1).unwrap();
    let gallery = project.gallery_images();
    assert_eq!(
        gallery,
        vec![
            "/images/jobplatform.png",
            "/images/login.png",
            "/images/jobs.png",
            "/images/companies.png",
        ]
    );
}

#[test]
fn gallery_filters_placeholder_and_empty_entries() {
    let project = Project {
        id: 99,
        title: "synthetic",
        description: "",
        detailed_description: "",
        image_url: "#",
        tags: &[],
        live_url: None,
        github_url: None,
        screenshots: &["", "#", "/images/a.png", "/images/a.png", "/images/b.png"],
    };
    assert_eq!(project.gallery_images(), vec!["/images/a.png", "/images/b.png"]);
}

// =============================================================
// Link placeholders
// =============================================================

#[test]
fn placeholder_repo_link_is_suppressed() {
    // The piano project carries "#" instead of a real repository URL.
    let piano = Project::find(2).unwrap();
    assert_eq!(piano.github_url, Some("#"));
    assert_eq!(piano.repo_link(), None);
    assert!(!piano.has_links());
}

#[test]
fn real_links_pass_through() {
    let portal = Project::find(1).unwrap();
    assert_eq!(
        portal.repo_link(),
        Some("https://github.com/pavankishore9304/job_portal_react_node")
    );
    assert_eq!(portal.live_link(), None);
    assert!(portal.has_links());
}
