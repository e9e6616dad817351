// GraphQL documents issued against the catalog backend.
//
// Backend schema versions disagree on how the author is exposed, and a
// GraphQL server rejects any selection its schema lacks. The templates carry
// an `__AUTHOR__` marker that is filled in for one `AuthorShape` only.

use std::fmt;
use std::str::FromStr;

const AUTHOR_MARKER: &str = "__AUTHOR__";

/// How the backend schema exposes a record's author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorShape {
    /// Flat `owner_username` string.
    #[default]
    OwnerUsername,
    /// Nested `author { displayName }` object.
    Profile,
}

impl AuthorShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OwnerUsername => "owner_username",
            Self::Profile => "author",
        }
    }

    fn selection(&self) -> &'static str {
        match self {
            Self::OwnerUsername => "owner_username",
            Self::Profile => "author {\n          displayName\n        }",
        }
    }
}

impl fmt::Display for AuthorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "owner_username" => Ok(Self::OwnerUsername),
            "author" => Ok(Self::Profile),
            other => Err(format!(
                "unknown author field `{other}` (expected `owner_username` or `author`)"
            )),
        }
    }
}

const LIST_PROMPTS_TEMPLATE: &str = r#"
  query ListPrompts($filter: ModelPromptFilterInput, $nextToken: String) {
    listPrompts(filter: $filter, nextToken: $nextToken) {
      items {
        name
        description
        tags
        instruction
        howto
        sourceURL
        public
        __AUTHOR__
        createdAt
        updatedAt
      }
      nextToken
    }
  }
"#;

const GET_PROMPT_BY_NAME_TEMPLATE: &str = r#"
  query GetPromptByName($name: String!) {
    listByName(name: $name) {
      items {
        name
        description
        tags
        instruction
        howto
        sourceURL
        public
        __AUTHOR__
        createdAt
        updatedAt
      }
    }
  }
"#;

const LIST_RULES_TEMPLATE: &str = r#"
  query ListRules($filter: ModelProjectRuleFilterInput, $nextToken: String) {
    listRules(filter: $filter, nextToken: $nextToken) {
      items {
        name
        description
        content
        tags
        public
        __AUTHOR__
        createdAt
        updatedAt
      }
      nextToken
    }
  }
"#;

const GET_RULE_BY_NAME_TEMPLATE: &str = r#"
  query GetRuleByName($name: String!) {
    listRuleByName(name: $name) {
      items {
        name
        description
        content
        tags
        public
        __AUTHOR__
        createdAt
        updatedAt
      }
    }
  }
"#;

/// The query documents for one backend schema version.
///
/// Prompt search reuses `list_prompts` with a text filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySet {
    pub list_prompts: String,
    pub get_prompt_by_name: String,
    pub list_rules: String,
    pub get_rule_by_name: String,
}

impl QuerySet {
    pub fn for_shape(shape: AuthorShape) -> Self {
        let fill = |template: &str| template.replace(AUTHOR_MARKER, shape.selection());
        Self {
            list_prompts: fill(LIST_PROMPTS_TEMPLATE),
            get_prompt_by_name: fill(GET_PROMPT_BY_NAME_TEMPLATE),
            list_rules: fill(LIST_RULES_TEMPLATE),
            get_rule_by_name: fill(GET_RULE_BY_NAME_TEMPLATE),
        }
    }
}

impl Default for QuerySet {
    fn default() -> Self {
        Self::for_shape(AuthorShape::default())
    }
}
