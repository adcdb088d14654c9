//! Typed lookup tables for role requirements and skill courses

use crate::error::{MatcherError, Result};
use crate::knowledge::builtin;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Current version of the knowledge base file format
pub const KNOWLEDGE_BASE_VERSION: u32 = 1;

/// Identity of a job role at a company
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleKey {
    pub company: String,
    pub role: String,
}

impl RoleKey {
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.company, self.role)
    }
}

/// Required skills for one role, in declaration order and free of duplicates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRequirement {
    key: RoleKey,
    skills: Vec<String>,
}

impl RoleRequirement {
    /// Build a requirement, rejecting duplicate skill tokens
    pub fn new(key: RoleKey, skills: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::new();
        for skill in &skills {
            if !seen.insert(skill.as_str()) {
                return Err(MatcherError::KnowledgeBase(format!(
                    "Duplicate skill '{}' in {}",
                    skill, key
                )));
            }
        }
        Ok(Self { key, skills })
    }

    pub fn key(&self) -> &RoleKey {
        &self.key
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

/// Capability: resolve the requirements of a role
pub trait RequirementSource: Send + Sync {
    fn requirement(&self, key: &RoleKey) -> Option<&RoleRequirement>;

    /// Resolve a role or fail with `UnknownRole`
    fn resolve(&self, key: &RoleKey) -> Result<&RoleRequirement> {
        self.requirement(key)
            .ok_or_else(|| MatcherError::unknown_role(&key.company, &key.role))
    }
}

/// Capability: resolve a course recommendation for a skill
pub trait CourseCatalog: Send + Sync {
    fn course_for(&self, skill: &str) -> Option<&str>;
}

/// On-disk representation of the knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnowledgeBaseFile {
    version: u32,
    #[serde(default)]
    roles: Vec<RoleEntry>,
    #[serde(default)]
    courses: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoleEntry {
    company: String,
    role: String,
    skills: Vec<String>,
}

/// Immutable role and course tables, built once at startup
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    roles: Vec<RoleRequirement>,
    index: HashMap<RoleKey, usize>,
    courses: HashMap<String, String>,
}

impl KnowledgeBase {
    /// The catalogue shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_tables(builtin::ROLES, builtin::COURSES)
    }

    /// Build from static `(company, role, skills)` and `(skill, course)` tables
    pub fn from_tables(roles: &[(&str, &str, &[&str])], courses: &[(&str, &str)]) -> Result<Self> {
        let mut kb = Self::empty();
        for (company, role, skills) in roles {
            let skills = skills.iter().map(|s| s.to_string()).collect();
            kb.push_role(RoleKey::new(*company, *role), skills)?;
        }
        kb.courses = courses
            .iter()
            .map(|(skill, course)| (skill.to_string(), course.to_string()))
            .collect();
        Ok(kb)
    }

    /// Load a versioned knowledge base file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let kb = Self::from_toml_str(&content)?;
        info!(
            "Loaded knowledge base from {} ({} roles, {} courses)",
            path.display(),
            kb.roles.len(),
            kb.courses.len()
        );
        Ok(kb)
    }

    /// Parse a knowledge base from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeBaseFile = toml::from_str(content)
            .map_err(|e| MatcherError::KnowledgeBase(format!("Failed to parse knowledge base: {}", e)))?;

        if file.version != KNOWLEDGE_BASE_VERSION {
            return Err(MatcherError::KnowledgeBase(format!(
                "Unsupported knowledge base version {} (expected {})",
                file.version, KNOWLEDGE_BASE_VERSION
            )));
        }

        let mut kb = Self::empty();
        for entry in file.roles {
            kb.push_role(RoleKey::new(entry.company, entry.role), entry.skills)?;
        }
        kb.courses = file.courses.into_iter().collect();
        Ok(kb)
    }

    /// Serialize back to the versioned TOML format
    pub fn to_toml_string(&self) -> Result<String> {
        let file = KnowledgeBaseFile {
            version: KNOWLEDGE_BASE_VERSION,
            roles: self
                .roles
                .iter()
                .map(|r| RoleEntry {
                    company: r.key.company.clone(),
                    role: r.key.role.clone(),
                    skills: r.skills.clone(),
                })
                .collect(),
            courses: self.courses.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| MatcherError::KnowledgeBase(format!("Failed to serialize knowledge base: {}", e)))
    }

    fn push_role(&mut self, key: RoleKey, skills: Vec<String>) -> Result<()> {
        if self.index.contains_key(&key) {
            return Err(MatcherError::KnowledgeBase(format!("Duplicate role {}", key)));
        }
        let requirement = RoleRequirement::new(key, skills)?;
        self.index.insert(requirement.key.clone(), self.roles.len());
        self.roles.push(requirement);
        Ok(())
    }

    fn empty() -> Self {
        Self {
            roles: Vec::new(),
            index: HashMap::new(),
            courses: HashMap::new(),
        }
    }

    /// Company names, sorted
    pub fn companies(&self) -> Vec<&str> {
        let mut companies: Vec<&str> = self.roles.iter().map(|r| r.key.company.as_str()).collect();
        companies.sort_unstable();
        companies.dedup();
        companies
    }

    /// Roles offered by a company, in declaration order
    pub fn roles_for(&self, company: &str) -> Vec<&RoleRequirement> {
        self.roles.iter().filter(|r| r.key.company == company).collect()
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

impl RequirementSource for KnowledgeBase {
    fn requirement(&self, key: &RoleKey) -> Option<&RoleRequirement> {
        self.index.get(key).map(|&i| &self.roles[i])
    }
}

impl CourseCatalog for KnowledgeBase {
    fn course_for(&self, skill: &str) -> Option<&str> {
        self.courses.get(skill).map(String::as_str)
    }
}
