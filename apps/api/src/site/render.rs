//! Server-side rendering of the portfolio page.
//!
//! Rendering is a pure function of the profile record: the same record always
//! yields the same document. Every profile string is HTML-escaped.

use crate::profile::{Experience, Profile, Project};
use crate::site::nav::{desktop_menu, mobile_menu, MenuItem, Section};

/// Headline words cycled by the hero's typing effect.
pub const TYPEWRITER_WORDS: [&str; 3] = ["AI/ML Systems.", "Full Stack Apps.", "Data Science."];

/// Figures shown beside the about text.
pub const ABOUT_STATS: [(&str, &str); 2] = [("3+", "Major Projects"), ("8.52", "CGPA")];

const PLAYGROUND_BADGE: &str = "Powered by Gemini 2.5";
const AVAILABILITY: &str = "Available for opportunities in 2025.";
const COPYRIGHT_YEAR: u16 = 2025;

/// Widget glue: posts to the relay endpoints. Chat answers are inserted as
/// text; fit-check answers are inserted as markup.
const WIDGET_SCRIPT: &str = r#"<script>
async function relay(path, body) {
  const res = await fetch(path, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  return res.ok ? res.json() : null;
}
document.getElementById("chat-form").addEventListener("submit", async (e) => {
  e.preventDefault();
  const query = e.target.query.value;
  if (!query.trim()) return;
  const out = document.getElementById("chat-response");
  out.textContent = "…";
  const reply = await relay("/api/v1/assistant/ask", { query });
  const asked = document.getElementById("chat-question");
  asked.textContent = query;
  asked.hidden = false;
  out.textContent = reply ? reply.response : "Connection error. Please try again.";
});
const fitForm = document.getElementById("fit-form");
const fitOut = document.getElementById("fit-analysis");
const fitReset = document.getElementById("fit-reset");
fitForm.addEventListener("submit", async (e) => {
  e.preventDefault();
  const jd_text = e.target.jd_text.value;
  if (!jd_text.trim()) return;
  fitOut.innerHTML = "";
  const reply = await relay("/api/v1/fit-check", { jd_text });
  if (reply && reply.analysis) {
    fitOut.innerHTML = reply.analysis;
    fitForm.hidden = true;
    fitReset.hidden = false;
  }
});
fitReset.addEventListener("click", () => {
  fitOut.innerHTML = "";
  fitReset.hidden = true;
  fitForm.hidden = false;
});
</script>
"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(profile: &Profile) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | {}</title>\n<meta name=\"description\" content=\"{}\">\n</head>\n<body>\n",
        escape_html(&profile.name),
        escape_html(&profile.role),
        escape_html(&profile.tagline),
    ));

    render_nav(&mut html);
    render_work(&mut html, profile);
    render_experience(&mut html, &profile.experience);
    render_about(&mut html, profile);
    render_skills(&mut html, &profile.skills);
    render_play(&mut html, profile);
    render_contact(&mut html, profile);

    html.push_str(WIDGET_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

fn menu_link(item: MenuItem) -> String {
    let target = match item {
        MenuItem::Resume => " target=\"_blank\" rel=\"noopener noreferrer\"",
        MenuItem::Section(_) => "",
    };
    format!(
        "<a href=\"/go/{}\"{target}>{}</a>",
        item.id(),
        escape_html(item.label())
    )
}

fn render_nav(html: &mut String) {
    html.push_str("<nav>\n<div class=\"menu-desktop\">\n");
    for item in desktop_menu() {
        html.push_str(&format!("{}\n", menu_link(item)));
    }
    html.push_str("</div>\n<details class=\"menu-mobile\">\n<summary>Menu</summary>\n");
    for item in mobile_menu() {
        html.push_str(&format!("{}\n", menu_link(item)));
    }
    html.push_str("</details>\n</nav>\n");
}

fn render_work(html: &mut String, profile: &Profile) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h1>Building <span class=\"typewriter\" data-words=\"{}\">{}</span></h1>\n\
         <p>I'm {}. {}</p>\n",
        Section::Work.id(),
        escape_html(&TYPEWRITER_WORDS.join("|")),
        escape_html(TYPEWRITER_WORDS[0]),
        escape_html(&profile.name),
        escape_html(&profile.tagline),
    ));

    html.push_str(&format!(
        "<p class=\"cta\"><a href=\"/go/{}\">Let's Talk</a> \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a> \
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Resume</a></p>\n",
        Section::Contact.id(),
        escape_html(&profile.contact.linkedin),
        escape_html(&profile.resume),
    ));

    html.push_str("<div class=\"projects\">\n");
    for project in &profile.projects {
        render_project(html, project);
    }
    html.push_str("</div>\n</section>\n");
}

fn render_project(html: &mut String, project: &Project) {
    html.push_str(&format!(
        "<article class=\"project\" id=\"project-{}\" data-gradient=\"{}\">\n\
         <span class=\"category\">{}</span>\n<h3>{}</h3>\n<p>{}</p>\n<p class=\"tech\">{}</p>\n\
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{} live site\">Live</a>\n",
        escape_html(&project.id),
        escape_html(&project.color),
        escape_html(&project.category),
        escape_html(&project.title),
        escape_html(&project.description),
        escape_html(&project.tech),
        escape_html(&project.link),
        escape_html(&project.title),
    ));
    if let Some(repo) = &project.repo {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{} GitHub repository\">Code</a>\n",
            escape_html(repo),
            escape_html(&project.title),
        ));
    }
    html.push_str("</article>\n");
}

fn render_experience(html: &mut String, experience: &[Experience]) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>Professional Experience</h2>\n",
        Section::Experience.id()
    ));
    for job in experience {
        html.push_str(&format!(
            "<article class=\"job\">\n<h3>{}</h3>\n<p class=\"role\">{}</p>\n<p class=\"date\">{}</p>\n<p>{}</p>\n<ul>\n",
            escape_html(&job.company),
            escape_html(&job.role),
            escape_html(&job.date),
            escape_html(&job.desc),
        ));
        for detail in &job.details {
            html.push_str(&format!("<li>{}</li>\n", escape_html(detail)));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");
}

fn render_about(html: &mut String, profile: &Profile) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>About Me</h2>\n<p>{}</p>\n<dl class=\"stats\">\n",
        Section::About.id(),
        escape_html(&profile.about),
    ));
    for (value, label) in ABOUT_STATS {
        html.push_str(&format!(
            "<div><dt>{}</dt><dd>{}</dd></div>\n",
            escape_html(value),
            escape_html(label)
        ));
    }
    html.push_str(&format!(
        "</dl>\n<p class=\"location\">{}</p>\n</section>\n",
        escape_html(&profile.location)
    ));
}

fn render_skills(html: &mut String, skills: &[String]) {
    html.push_str("<section id=\"skills\">\n<h2>Technical Arsenal</h2>\n<ul class=\"skills\">\n");
    for skill in skills {
        html.push_str(&format!("<li>{}</li>\n", escape_html(skill)));
    }
    html.push_str("</ul>\n</section>\n");
}

fn render_play(html: &mut String, profile: &Profile) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>AI Playground</h2>\n<p class=\"badge\">{}</p>\n\
         <div class=\"widget\">\n<h3>Ask AI Assistant</h3>\n\
         <p id=\"chat-question\" hidden></p>\n\
         <p id=\"chat-response\">Ask me about {}'s projects, skills, or experience.</p>\n\
         <form id=\"chat-form\"><input name=\"query\" placeholder=\"Ask anything...\" autocomplete=\"off\">\
         <button type=\"submit\">Send</button></form>\n</div>\n\
         <div class=\"widget\">\n<h3>Fit Check</h3>\n\
         <form id=\"fit-form\"><textarea name=\"jd_text\" placeholder=\"Paste a Job Description...\"></textarea>\
         <button type=\"submit\">Analyze Fit</button></form>\n<div id=\"fit-analysis\"></div>\n\
         <button type=\"button\" id=\"fit-reset\" hidden>Check another role</button>\n</div>\n\
         </section>\n",
        Section::Play.id(),
        PLAYGROUND_BADGE,
        escape_html(profile.first_name()),
    ));
}

fn render_contact(html: &mut String, profile: &Profile) {
    html.push_str(&format!(
        "<section id=\"{}\">\n<h2>Let's create impact.</h2>\n<p>{}</p>\n\
         <a href=\"mailto:{}\">Say Hello</a>\n\
         <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">LinkedIn</a>\n\
         <p class=\"phone\">{}</p>\n<p>&copy; {} {}</p>\n</section>\n",
        Section::Contact.id(),
        AVAILABILITY,
        escape_html(&profile.contact.email),
        escape_html(&profile.contact.linkedin),
        escape_html(&profile.contact.phone),
        COPYRIGHT_YEAR,
        escape_html(&profile.name),
    ));
}
