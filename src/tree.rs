//! The documentation tree consumed by the checker.
//!
//! The tree is produced by an upstream documentation generator and handed to
//! docspell as JSON. Nothing here parses source code; every node already
//! carries its identifiers, comment text and a printable location.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Blank and whitespace-only comments count as empty.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    #[default]
    Class,
    Module,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrAccess {
    R,
    W,
    #[default]
    RW,
}

impl AttrAccess {
    pub fn definition(self) -> &'static str {
        match self {
            AttrAccess::R => "attr_reader",
            AttrAccess::W => "attr_writer",
            AttrAccess::RW => "attr_accessor",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLocation {
    #[serde(default)]
    pub text: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    pub name: String,
    #[serde(default)]
    pub comment: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub comment: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub access: AttrAccess,
    #[serde(default)]
    pub comment: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub singleton: bool,
    #[serde(default)]
    pub comment: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub old_name: String,
    pub new_name: String,
    #[serde(default)]
    pub comment: Comment,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub kind: ModuleKind,
    #[serde(default)]
    pub comments: Vec<CommentLocation>,
    #[serde(default)]
    pub includes: Vec<Include>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    #[serde(default)]
    pub external_aliases: Vec<Alias>,
}

impl Module {
    /// `class Foo::Bar` or `module Foo`
    pub fn definition(&self) -> String {
        match self.kind {
            ModuleKind::Class => format!("class {}", self.full_name),
            ModuleKind::Module => format!("module {}", self.full_name),
        }
    }

    /// Ordinary aliases followed by external ones.
    pub fn all_aliases(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter().chain(self.external_aliases.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub absolute_name: String,
    #[serde(default)]
    pub comment: Comment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTree {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub files: Vec<File>,
}

impl DocTree {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read documentation tree: {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse documentation tree: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Every node in traversal order: each module followed by its includes,
    /// constants, attributes, methods and aliases, then all files.
    pub fn nodes(&self) -> impl Iterator<Item = DocNode<'_>> {
        let module_nodes = self.modules.iter().flat_map(|module| {
            std::iter::once(DocNode::Module(module))
                .chain(
                    module
                        .includes
                        .iter()
                        .map(move |include| DocNode::Include { module, include }),
                )
                .chain(
                    module
                        .constants
                        .iter()
                        .map(move |constant| DocNode::Constant { module, constant }),
                )
                .chain(
                    module
                        .attributes
                        .iter()
                        .map(move |attribute| DocNode::Attribute { module, attribute }),
                )
                .chain(
                    module
                        .methods
                        .iter()
                        .map(move |method| DocNode::Method { module, method }),
                )
                .chain(module.all_aliases().map(DocNode::Alias))
        });

        module_nodes.chain(self.files.iter().map(DocNode::File))
    }
}

/// A comment attached to a named (or anonymous) item at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documented<'a> {
    pub name: Option<String>,
    pub comment: &'a Comment,
    pub location: &'a str,
}

/// Uniform view over every kind of node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum DocNode<'a> {
    Module(&'a Module),
    Include {
        module: &'a Module,
        include: &'a Include,
    },
    Constant {
        module: &'a Module,
        constant: &'a Constant,
    },
    Attribute {
        module: &'a Module,
        attribute: &'a Attribute,
    },
    Method {
        module: &'a Module,
        method: &'a Method,
    },
    Alias(&'a Alias),
    File(&'a File),
}

impl<'a> DocNode<'a> {
    /// Identifier strings this node contributes to the session dictionary.
    pub fn identifiers(&self) -> Vec<&'a str> {
        match *self {
            DocNode::Module(module) => vec![module.name.as_str()],
            DocNode::Include { include, .. } => vec![include.name.as_str()],
            DocNode::Constant { constant, .. } => vec![constant.name.as_str()],
            DocNode::Attribute { attribute, .. } => vec![attribute.name.as_str()],
            DocNode::Method { method, .. } => vec![method.name.as_str()],
            DocNode::Alias(alias) => {
                vec![alias.old_name.as_str(), alias.new_name.as_str()]
            }
            DocNode::File(file) => file
                .absolute_name
                .split(['/', '\\', '.'])
                .filter(|part| !part.is_empty())
                .collect(),
        }
    }

    /// The comments this node carries. Modules may be documented in several
    /// places; every other node has exactly one comment.
    pub fn documented(&self) -> Vec<Documented<'a>> {
        match *self {
            DocNode::Module(module) => {
                let name = module.definition();
                module
                    .comments
                    .iter()
                    .map(|pair| Documented {
                        name: Some(name.clone()),
                        comment: &pair.text,
                        location: &pair.location,
                    })
                    .collect()
            }
            DocNode::Include { module, include } => vec![Documented {
                name: Some(format!("{}.include {}", module.full_name, include.name)),
                comment: &include.comment,
                location: &include.location,
            }],
            DocNode::Constant { module, constant } => vec![Documented {
                name: Some(format!("{}::{}", module.full_name, constant.name)),
                comment: &constant.comment,
                location: &constant.location,
            }],
            DocNode::Attribute { module, attribute } => vec![Documented {
                name: Some(format!(
                    "{}.{} :{}",
                    module.full_name,
                    attribute.access.definition(),
                    attribute.name
                )),
                comment: &attribute.comment,
                location: &attribute.location,
            }],
            DocNode::Method { module, method } => {
                let separator = if method.singleton { "::" } else { "#" };
                vec![Documented {
                    name: Some(format!("{}{}{}", module.full_name, separator, method.name)),
                    comment: &method.comment,
                    location: &method.location,
                }]
            }
            // aliases are always reported under Object, whichever module owns them
            DocNode::Alias(alias) => vec![Documented {
                name: Some(format!("Object alias {} {}", alias.old_name, alias.new_name)),
                comment: &alias.comment,
                location: &alias.location,
            }],
            DocNode::File(file) => vec![Documented {
                name: None,
                comment: &file.comment,
                location: &file.name,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "modules": [{
            "name": "Spellcheck",
            "full_name": "Generator::Spellcheck",
            "comments": [
                {"text": "First", "location": "lib/a.rb"},
                {"text": "Second", "location": "lib/b.rb"}
            ],
            "includes": [{"name": "Enumerable", "location": "lib/a.rb"}],
            "constants": [{"name": "DEFAULT_WORDS", "comment": "Words", "location": "lib/a.rb"}],
            "attributes": [{"name": "spell", "access": "R", "location": "lib/a.rb"}],
            "methods": [
                {"name": "add_name", "location": "lib/a.rb"},
                {"name": "setup_options", "singleton": true, "location": "lib/a.rb"}
            ],
            "aliases": [{"old_name": "generate", "new_name": "run", "location": "lib/a.rb"}],
            "external_aliases": [{"old_name": "old_ext", "new_name": "new_ext", "location": "lib/a.rb"}]
        }],
        "files": [{"name": "lib/a.rb", "absolute_name": "/home/dev/lib/a.rb", "comment": "  "}]
    }"#;

    #[test]
    fn test_comment_emptiness() {
        assert!(Comment::new("").is_empty());
        assert!(Comment::new(" \n\t").is_empty());
        assert!(!Comment::new(" word ").is_empty());
    }

    #[test]
    fn test_traversal_order() {
        let tree = DocTree::from_json(TREE).unwrap();
        let kinds: Vec<_> = tree
            .nodes()
            .map(|node| match node {
                DocNode::Module(_) => "module",
                DocNode::Include { .. } => "include",
                DocNode::Constant { .. } => "constant",
                DocNode::Attribute { .. } => "attribute",
                DocNode::Method { .. } => "method",
                DocNode::Alias(_) => "alias",
                DocNode::File(_) => "file",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "module",
                "include",
                "constant",
                "attribute",
                "method",
                "method",
                "alias",
                "alias",
                "file"
            ]
        );
    }

    #[test]
    fn test_report_names() {
        let tree = DocTree::from_json(TREE).unwrap();
        let names: Vec<_> = tree
            .nodes()
            .flat_map(|node| node.documented())
            .map(|doc| doc.name)
            .collect();

        assert_eq!(
            names,
            vec![
                Some("class Generator::Spellcheck".to_string()),
                Some("class Generator::Spellcheck".to_string()),
                Some("Generator::Spellcheck.include Enumerable".to_string()),
                Some("Generator::Spellcheck::DEFAULT_WORDS".to_string()),
                Some("Generator::Spellcheck.attr_reader :spell".to_string()),
                Some("Generator::Spellcheck#add_name".to_string()),
                Some("Generator::Spellcheck::setup_options".to_string()),
                Some("Object alias generate run".to_string()),
                Some("Object alias old_ext new_ext".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_file_identifiers_split_on_separators_and_dots() {
        let tree = DocTree::from_json(TREE).unwrap();
        let file = tree.nodes().last().unwrap();
        assert_eq!(file.identifiers(), vec!["home", "dev", "lib", "a", "rb"]);

        let windows = File {
            name: "a.rb".to_string(),
            absolute_name: r"C:\src\doc_spell.rb".to_string(),
            comment: Comment::default(),
        };
        assert_eq!(
            DocNode::File(&windows).identifiers(),
            vec!["C:", "src", "doc_spell", "rb"]
        );
    }

    #[test]
    fn test_file_location_is_relative_name() {
        let tree = DocTree::from_json(TREE).unwrap();
        let file = tree.nodes().last().unwrap();
        let documented = file.documented();
        assert_eq!(documented[0].location, "lib/a.rb");
        assert!(documented[0].comment.is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tree = DocTree::from_json("{}").unwrap();
        assert_eq!(tree.nodes().count(), 0);
    }
}
