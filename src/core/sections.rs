/// The content sections reachable from the orbital navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Projects,
    About,
    Resume,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Projects,
        Section::About,
        Section::Resume,
        Section::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Section::Projects => 0,
            Section::About => 1,
            Section::Resume => 2,
            Section::Contact => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::About => "About",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }

    /// Lowercase identifier used for DOM ids and data attributes.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::About => "about",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
    }

    /// Static HTML body shown in the section's modal.
    pub fn content_html(self) -> &'static str {
        match self {
            Section::Projects => PROJECTS_HTML,
            Section::About => ABOUT_HTML,
            Section::Resume => RESUME_HTML,
            Section::Contact => CONTACT_HTML,
        }
    }
}

const PROJECTS_HTML: &str = r#"<div class="project-grid">
  <article class="project-card">
    <h3>Orbital Portfolio</h3>
    <p>This site: a WebGPU scene written in Rust and compiled to WebAssembly.</p>
    <p class="tags">Rust · wgpu · wasm-bindgen</p>
  </article>
  <article class="project-card">
    <h3>Generative Visualizer</h3>
    <p>Real-time audio-reactive visuals driven by a procedural sequencer.</p>
    <p class="tags">WebGPU · WebAudio</p>
  </article>
  <article class="project-card">
    <h3>Graph Tracker CLI</h3>
    <p>Command line tool for tracking task graphs across repositories.</p>
    <p class="tags">clap · serde · SQLite</p>
  </article>
</div>"#;

const ABOUT_HTML: &str = r#"<p>I build fast, reliable software with a soft spot for graphics and tooling.</p>
<p>Most of my recent work is in Rust, from command line tools to browser front-ends running on WebAssembly.</p>"#;

const RESUME_HTML: &str = r#"<section class="resume">
  <h3>Experience</h3>
  <ul>
    <li><strong>Software Engineer</strong> · graphics and web platform, 2021 to present</li>
    <li><strong>Developer</strong> · internal tooling and automation, 2018 to 2021</li>
  </ul>
  <h3>Skills</h3>
  <p>Rust, TypeScript, WebGPU, WebAssembly, Linux</p>
  <a class="download" href="resume.pdf" download>Download PDF</a>
</section>"#;

const CONTACT_HTML: &str = r#"<ul class="contact-links">
  <li><a href="mailto:hello@example.com">hello@example.com</a></li>
  <li><a href="https://github.com/" target="_blank" rel="noopener">GitHub</a></li>
  <li><a href="https://www.linkedin.com/" target="_blank" rel="noopener">LinkedIn</a></li>
</ul>"#;
