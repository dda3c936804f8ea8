//! Symbolic path tokens
//!
//! Config strings refer to build roots through `{{ROOT}}`, `{{SRC}}`,
//! `{{WWW}}`, `{{BUILD}}` and `{{TMP}}`. Substitution happens when a task
//! executes, never when its config is loaded, so a config stays valid for
//! any context it is later run against.

use crate::error::PathVarError;

use super::context::BuildContext;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// The recognized tokens, in lookup order.
pub const PATH_TOKENS: &[&str] = &["ROOT", "SRC", "WWW", "BUILD", "TMP"];

/// How unrecognized `{{NAME}}` tokens are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPolicy {
    /// Leave them in place as literal text
    #[default]
    Lenient,
    /// Reject the template
    Strict,
}

fn lookup<'a>(context: &'a BuildContext, name: &str) -> Option<std::borrow::Cow<'a, str>> {
    let dir = match name {
        "ROOT" => &context.root_dir,
        "SRC" => &context.src_dir,
        "WWW" => &context.www_dir,
        "BUILD" => &context.build_dir,
        "TMP" => &context.tmp_dir,
        _ => return None,
    };
    Some(dir.to_string_lossy())
}

/// Substitute every recognized token; unknown tokens are kept verbatim.
pub fn replace_path_vars(context: &BuildContext, template: &str) -> String {
    match substitute(context, template, TokenPolicy::Lenient) {
        Ok(path) => path,
        // Lenient substitution has no failure path
        Err(_) => template.to_string(),
    }
}

/// Substitute every recognized token; an unknown `{{NAME}}` is an error.
pub fn replace_path_vars_strict(
    context: &BuildContext,
    template: &str,
) -> Result<String, PathVarError> {
    substitute(context, template, TokenPolicy::Strict)
}

/// Substitute with an explicit policy.
pub fn substitute(
    context: &BuildContext,
    template: &str,
    policy: TokenPolicy,
) -> Result<String, PathVarError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // Unterminated: the remainder is literal text
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = &after_open[..end];
        match lookup(context, name) {
            Some(value) => out.push_str(&value),
            None => {
                if policy == TokenPolicy::Strict && is_token_name(name) {
                    return Err(PathVarError::UnknownToken {
                        token: format!("{OPEN}{name}{CLOSE}"),
                        template: template.to_string(),
                    });
                }
                out.push_str(OPEN);
                out.push_str(name);
                out.push_str(CLOSE);
            }
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Whether `template` still contains a recognized token.
pub fn contains_path_vars(template: &str) -> bool {
    PATH_TOKENS
        .iter()
        .any(|name| template.contains(&format!("{OPEN}{name}{CLOSE}")))
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
