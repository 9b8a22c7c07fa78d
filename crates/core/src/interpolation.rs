//! Positional placeholder expansion for command templates.

/// The literal placeholder token inside a saved command template.
pub const PLACEHOLDER: &str = "{}";

/// Expands `{}` placeholders in a template with positional arguments.
///
/// Each argument, in order, replaces the first remaining occurrence of the
/// literal `{}` token. If the template has more placeholders than arguments,
/// the excess placeholders are left verbatim. If there are more arguments
/// than placeholders, the excess arguments are dropped and never appear in
/// the output. This is strict one-to-one, first-match substitution, not a
/// global replace.
///
/// # Examples
///
/// ```
/// use term_cli_core::interpolation::expand_placeholders;
///
/// let expanded = expand_placeholders("echo hello {}", &["world".to_string()]);
/// assert_eq!(expanded, "echo hello world");
/// ```
pub fn expand_placeholders(template: &str, arguments: &[String]) -> String {
    let mut expanded = template.to_string();
    for argument in arguments {
        expanded = expanded.replacen(PLACEHOLDER, argument, 1);
    }
    expanded
}
