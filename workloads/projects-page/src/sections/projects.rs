//! Projects grid section.

use crate::data::{Project, ProjectsData};

use super::html_escape;

/// Render the projects section, one card per project in display order.
pub fn render_projects(data: &ProjectsData) -> String {
    if data.is_empty() {
        return r#"<section class="projects" data-section="projects">
    <p class="projects-empty">No projects yet.</p>
</section>"#
            .to_string();
    }

    let cards: String = data.projects.iter().map(render_project_card).collect();

    format!(
        r#"<section class="projects" data-section="projects">
    <div class="projects-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render a single project card.
pub fn render_project_card(project: &Project) -> String {
    let badge = if project.is_hackclub() {
        r#"<span class="badge badge-hackclub">Hack Club</span>"#
    } else {
        ""
    };

    format!(
        r#"<article class="project-card">
            <a class="project-link" href="{link}" target="_blank" rel="noopener">
                <img class="project-image" src="{image}" alt="{title}" loading="lazy">
            </a>
            <div class="project-body">
                <h3 class="project-title">{title}{badge}</h3>
                <p class="project-description">{description}</p>
                <iframe class="project-embed" src="{iframe}" title="{title}" loading="lazy"></iframe>
            </div>
        </article>"#,
        link = html_escape(&project.link),
        image = html_escape(&project.image),
        title = html_escape(&project.title),
        badge = badge,
        description = html_escape(&project.description),
        iframe = html_escape(&project.iframe),
    )
}

/// Render placeholder cards while the projects are loading.
pub fn render_projects_skeleton(count: usize) -> String {
    let cards: String = (0..count)
        .map(|_| {
            r#"<article class="project-card skeleton">
            <div class="skeleton-image"></div>
            <div class="skeleton-text skeleton-title"></div>
            <div class="skeleton-text"></div>
        </article>"#
        })
        .collect();

    format!(
        r#"<section class="projects skeleton" data-section="projects">
    <div class="projects-grid">
        {}
    </div>
</section>"#,
        cards
    )
}
