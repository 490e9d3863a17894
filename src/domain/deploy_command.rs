//! Rendering of the `prod-deploy` command template.

use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

/// Render `template` with the `env` and `feature` placeholders filled in.
///
/// Accepts both `{{ env }}` and the older `{{.env}}` field syntax. Only `{{ }}`
/// is special: `{%` and `{#` pass through so shell text like `${#var}` survives.
pub fn render_deploy_command(template: &str, env: &str, feature: &str) -> Result<String, AppError> {
    let source = normalize_field_syntax(template);

    let mut jinja = Environment::new();
    jinja.set_keep_trailing_newline(true);
    jinja.set_undefined_behavior(UndefinedBehavior::Strict);
    jinja.set_syntax(variables_only_syntax()?);

    Ok(jinja.render_str(&source, context! { env => env, feature => feature })?)
}

/// Block and comment delimiters start with NUL, which a shell command line cannot contain.
fn variables_only_syntax() -> Result<SyntaxConfig, AppError> {
    Ok(SyntaxConfig::builder()
        .block_delimiters("\0{%", "%}\0")
        .variable_delimiters("{{", "}}")
        .comment_delimiters("\0{#", "#}\0")
        .build()?)
}

fn normalize_field_syntax(template: &str) -> String {
    template.replace("{{.", "{{ ").replace("{{ .", "{{ ")
}
