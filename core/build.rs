use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct ContentFile {
    resume_href: String,
    profile: ProfileEntry,
    #[serde(default)]
    social: Vec<SocialEntry>,
    about: AboutEntry,
    #[serde(default)]
    experience: Vec<ExperienceEntry>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
    #[serde(default)]
    blog: Vec<BlogEntry>,
}

#[derive(Deserialize)]
struct ProfileEntry {
    name: String,
    title: String,
    tagline: String,
}

#[derive(Deserialize)]
struct SocialEntry {
    label: String,
    href: String,
}

#[derive(Deserialize)]
struct AboutEntry {
    paragraphs: Vec<String>,
}

#[derive(Deserialize)]
struct ExperienceEntry {
    period: String,
    role: String,
    company: String,
    subtitle: Option<String>,
    href: String,
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct ProjectEntry {
    title: String,
    href: String,
    image: String,
    alt: Option<String>,
    gradient: Option<[String; 2]>,
    summary: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Deserialize)]
struct BlogEntry {
    title: String,
    href: String,
    image: String,
    alt: Option<String>,
    gradient: Option<[String; 2]>,
    summary: String,
    published: String,
    read_time: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read portfolio content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse portfolio content at {}: {err}",
            content_path.display()
        )
    });

    validate_content(&content, &content_path);

    let mut output = String::new();
    writeln!(
        &mut output,
        "pub const RESUME_HREF: &str = {};",
        rust_string(&content.resume_href)
    )
    .unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const PROFILE: Profile = Profile {{").unwrap();
    writeln!(&mut output, "    name: {},", rust_string(&content.profile.name)).unwrap();
    writeln!(&mut output, "    title: {},", rust_string(&content.profile.title)).unwrap();
    writeln!(&mut output, "    tagline: {},", rust_string(&content.profile.tagline)).unwrap();
    writeln!(&mut output, "}};").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const SOCIAL_LINKS: &[SocialLink] = &[").unwrap();
    for link in &content.social {
        writeln!(
            &mut output,
            "    SocialLink {{ label: {}, href: {} }},",
            rust_string(&link.label),
            rust_string(&link.href)
        )
        .unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(
        &mut output,
        "pub const ABOUT_PARAGRAPHS: &[&str] = {};",
        rust_str_slice(&content.about.paragraphs)
    )
    .unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const EXPERIENCE: &[ExperienceEntry] = &[").unwrap();
    for entry in &content.experience {
        writeln!(&mut output, "    ExperienceEntry {{").unwrap();
        writeln!(&mut output, "        period: {},", rust_string(&entry.period)).unwrap();
        writeln!(&mut output, "        role: {},", rust_string(&entry.role)).unwrap();
        writeln!(&mut output, "        company: {},", rust_string(&entry.company)).unwrap();
        writeln!(&mut output, "        subtitle: {},", rust_opt_string(entry.subtitle.as_deref())).unwrap();
        writeln!(&mut output, "        href: {},", rust_string(&entry.href)).unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        tags: {},", rust_str_slice(&entry.tags)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const PROJECTS: &[ProjectEntry] = &[").unwrap();
    for entry in &content.projects {
        writeln!(&mut output, "    ProjectEntry {{").unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        href: {},", rust_string(&entry.href)).unwrap();
        writeln!(
            &mut output,
            "        preview: {},",
            rust_preview(&entry.image, entry.alt.as_deref(), entry.gradient.as_ref())
        )
        .unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        tags: {},", rust_str_slice(&entry.tags)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const BLOG_POSTS: &[BlogPost] = &[").unwrap();
    for entry in &content.blog {
        // Posts without their own alt text are described by their title.
        let alt = entry.alt.as_deref().unwrap_or(entry.title.as_str());
        writeln!(&mut output, "    BlogPost {{").unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        href: {},", rust_string(&entry.href)).unwrap();
        writeln!(
            &mut output,
            "        preview: {},",
            rust_preview(&entry.image, Some(alt), entry.gradient.as_ref())
        )
        .unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        published: {},", rust_string(&entry.published)).unwrap();
        writeln!(&mut output, "        read_time: {},", rust_string(&entry.read_time)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("portfolio_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PORTFOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/portfolio.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn rust_opt_string(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("Some({})", rust_string(value)),
        None => "None".to_string(),
    }
}

fn rust_str_slice(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|value| rust_string(value)).collect();
    format!("&[{}]", items.join(", "))
}

fn rust_preview(image: &str, alt: Option<&str>, gradient: Option<&[String; 2]>) -> String {
    let alt = match alt {
        Some(alt) => rust_string(alt),
        None => "crate::preview::DEFAULT_PREVIEW_ALT".to_string(),
    };
    let gradient = match gradient {
        Some([from, to]) => format!("crate::preview::Gradient::new({}, {})", rust_string(from), rust_string(to)),
        None => "crate::preview::DEFAULT_FALLBACK_GRADIENT".to_string(),
    };
    format!(
        "PreviewImage {{ src: {}, alt: {}, fallback: {} }}",
        rust_string(image.trim()),
        alt,
        gradient
    )
}

fn validate_content(content: &ContentFile, content_path: &Path) {
    if content.profile.name.trim().is_empty() {
        panic!("profile name cannot be empty in {}", content_path.display());
    }
    if content.resume_href.trim().is_empty() {
        panic!("resume_href cannot be empty in {}", content_path.display());
    }
    for link in &content.social {
        if link.label.trim().is_empty() {
            panic!("social link label cannot be empty in {}", content_path.display());
        }
        validate_href(&link.href, &link.label, content_path);
    }
    let mut hrefs = HashSet::new();
    for entry in &content.experience {
        validate_href(&entry.href, &entry.company, content_path);
        if !hrefs.insert(entry.href.clone()) {
            panic!(
                "duplicate experience href '{}' in {}",
                entry.href,
                content_path.display()
            );
        }
    }
    for entry in &content.projects {
        validate_href(&entry.href, &entry.title, content_path);
        validate_image(&entry.image, &entry.title, content_path);
        if let Some(gradient) = &entry.gradient {
            validate_gradient(gradient, &entry.title, content_path);
        }
    }
    for entry in &content.blog {
        validate_href(&entry.href, &entry.title, content_path);
        validate_image(&entry.image, &entry.title, content_path);
        if let Some(gradient) = &entry.gradient {
            validate_gradient(gradient, &entry.title, content_path);
        }
    }
}

fn validate_href(href: &str, owner: &str, content_path: &Path) {
    let href = href.trim();
    let allowed = href.starts_with("https://")
        || href.starts_with("http://")
        || href.starts_with("mailto:")
        || href.starts_with('/');
    if !allowed {
        panic!(
            "'{}' has unsupported href '{}' in {}",
            owner,
            href,
            content_path.display()
        );
    }
}

fn validate_image(src: &str, owner: &str, content_path: &Path) {
    let src = src.trim();
    if src.is_empty() {
        panic!("'{}' image cannot be empty in {}", owner, content_path.display());
    }
    if src.starts_with("data:") {
        panic!(
            "'{}' image cannot be a data URL in {}",
            owner,
            content_path.display()
        );
    }
}

fn validate_gradient(gradient: &[String; 2], owner: &str, content_path: &Path) {
    for color in gradient {
        let Some(hex) = color.strip_prefix('#') else {
            panic!(
                "'{}' gradient color '{}' must start with '#' in {}",
                owner,
                color,
                content_path.display()
            );
        };
        let valid_len = hex.len() == 3 || hex.len() == 6;
        if !valid_len || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
            panic!(
                "'{}' gradient color '{}' is not a hex color in {}",
                owner,
                color,
                content_path.display()
            );
        }
    }
}
