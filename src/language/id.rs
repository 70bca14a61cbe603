//! Canonical language identifiers
//!
//! [`LanguageId`] is the closed set of identifiers the detector can report.
//! Each identifier carries its canonical string, a curated display name and
//! the grammar id the syntax highlighter expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detector::errors::DetectorError;

macro_rules! language_ids {
    ($( $variant:ident => $id:literal, $name:literal, $grammar:literal; )+) => {
        /// Canonical identifier of a detectable language or format
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum LanguageId {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl LanguageId {
            /// Every identifier, sorted by its canonical string
            pub const ALL: &'static [LanguageId] = &[$(LanguageId::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(LanguageId::$variant => $id,)+
                }
            }

            /// Human-readable name shown in code block labels and pickers
            #[must_use]
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(LanguageId::$variant => $name,)+
                }
            }

            /// Grammar identifier understood by the syntax highlighter
            #[must_use]
            pub const fn highlighter_id(self) -> &'static str {
                match self {
                    $(LanguageId::$variant => $grammar,)+
                }
            }
        }

        impl FromStr for LanguageId {
            type Err = DetectorError;

            /// Parses canonical identifiers only; aliases go through
            /// [`LanguageCatalog::normalize`](super::LanguageCatalog::normalize).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(LanguageId::$variant),)+
                    other => Err(DetectorError::UnknownLanguage(other.to_string())),
                }
            }
        }
    };
}

language_ids! {
    Ansible => "ansible", "Ansible", "yaml";
    Apache => "apache", "Apache", "apache";
    Bash => "bash", "Bash", "bash";
    C => "c", "C", "c";
    Caddyfile => "caddyfile", "Caddyfile", "nginx";
    Cmd => "cmd", "CMD", "bat";
    Cpp => "cpp", "C++", "cpp";
    Csharp => "csharp", "C#", "csharp";
    Css => "css", "CSS", "css";
    Csv => "csv", "CSV", "csv";
    DockerCompose => "docker-compose", "Docker Compose", "yaml";
    Dockerfile => "dockerfile", "Dockerfile", "docker";
    Dotenv => "dotenv", ".env", "dotenv";
    Go => "go", "Go", "go";
    Html => "html", "HTML", "html";
    Ini => "ini", "INI", "ini";
    Java => "java", "Java", "java";
    Javascript => "javascript", "JavaScript", "javascript";
    Json => "json", "JSON", "json";
    Jsonc => "jsonc", "JSON with Comments", "jsonc";
    Jsonl => "jsonl", "JSON Lines", "json";
    Jsx => "jsx", "JSX", "jsx";
    Kubernetes => "kubernetes", "Kubernetes", "yaml";
    Less => "less", "Less", "less";
    Log => "log", "Log", "log";
    Markdown => "markdown", "Markdown", "markdown";
    Mdx => "mdx", "MDX", "mdx";
    Mysql => "mysql", "MySQL", "sql";
    Nginx => "nginx", "Nginx", "nginx";
    NginxAccessLog => "nginx-access-log", "Nginx Access Log", "log";
    NginxErrorLog => "nginx-error-log", "Nginx Error Log", "log";
    Php => "php", "PHP", "php";
    PlainText => "plain-text", "Plain Text", "plaintext";
    Postgresql => "postgresql", "PostgreSQL", "sql";
    Powershell => "powershell", "PowerShell", "powershell";
    Python => "python", "Python", "python";
    Ruby => "ruby", "Ruby", "ruby";
    Rust => "rust", "Rust", "rust";
    Scss => "scss", "SCSS", "scss";
    Sql => "sql", "SQL", "sql";
    Svg => "svg", "SVG", "xml";
    Terraform => "terraform", "Terraform", "hcl";
    Toml => "toml", "TOML", "toml";
    Tsx => "tsx", "TSX", "tsx";
    Typescript => "typescript", "TypeScript", "typescript";
    Xml => "xml", "XML", "xml";
    Yaml => "yaml", "YAML", "yaml";
}

impl LanguageId {
    /// The fallback reported when nothing reaches its threshold
    pub const FALLBACK: LanguageId = LanguageId::PlainText;

    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, LanguageId::PlainText)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_unique() {
        let ids: Vec<&str> = LanguageId::ALL.iter().map(|id| id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 47);
    }

    #[test]
    fn from_str_accepts_canonical_ids_only() {
        for id in LanguageId::ALL {
            assert_eq!(id.as_str().parse::<LanguageId>().ok(), Some(*id));
        }
        assert!("js".parse::<LanguageId>().is_err());
        assert!("YAML".parse::<LanguageId>().is_err());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let json = serde_json::to_string(&LanguageId::DockerCompose).unwrap();
        assert_eq!(json, "\"docker-compose\"");
        let back: LanguageId = serde_json::from_str("\"nginx-access-log\"").unwrap();
        assert_eq!(back, LanguageId::NginxAccessLog);
    }

    #[test]
    fn display_names_are_curated() {
        assert_eq!(LanguageId::Javascript.display_name(), "JavaScript");
        assert_eq!(LanguageId::Csharp.display_name(), "C#");
        assert_eq!(LanguageId::Dotenv.display_name(), ".env");
        for id in LanguageId::ALL {
            assert!(!id.display_name().is_empty());
        }
    }

    #[test]
    fn highlighter_ids_collapse_variants() {
        assert_eq!(LanguageId::Dockerfile.highlighter_id(), "docker");
        assert_eq!(LanguageId::Kubernetes.highlighter_id(), "yaml");
        assert_eq!(LanguageId::Terraform.highlighter_id(), "hcl");
        assert_eq!(LanguageId::NginxErrorLog.highlighter_id(), "log");
        assert_eq!(LanguageId::PlainText.highlighter_id(), "plaintext");
        assert_eq!(LanguageId::Rust.highlighter_id(), "rust");
    }
}
