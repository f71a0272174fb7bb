//! Naming-convention conversion for BEM identifiers.
//!
//! Block, element and modifier names are presented in param case
//! (`large-icon`), while generated type identifiers use pascal case
//! (`LargeIconBlock`). Both conversions share the same word splitting:
//!
//! - a lowercase letter or digit followed by an uppercase letter starts a new
//!   word (`fooBar` → `foo`, `Bar`);
//! - an uppercase letter followed by an uppercase/lowercase pair starts a new
//!   word before the pair (`XMLHttp` → `XML`, `Http`);
//! - any run of non-alphanumeric characters separates words and is dropped.
//!
//! Both functions are total: the empty string, or a string without any
//! alphanumeric character, converts to the empty string.

/// Convert an identifier to lowercase, hyphen-separated form.
///
/// The conversion is idempotent: converting an already converted string
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use bemtype_core::case::to_param_case;
///
/// assert_eq!(to_param_case("FooBar"), "foo-bar");
/// assert_eq!(to_param_case("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(to_param_case("large_icon"), "large-icon");
/// assert_eq!(to_param_case(""), "");
/// ```
pub fn to_param_case(input: &str) -> String {
    split_words(input)
        .iter()
        .map(|word| {
            // Lowercase mappings may introduce combining marks; keep only the
            // characters that would survive a second split.
            word.to_lowercase()
                .chars()
                .filter(|ch| ch.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert an identifier to upper camel case for use as a type name.
///
/// Every word is capitalized and the remaining characters are lowercased.
/// Words are joined directly only where the join still reads back as a word
/// boundary, that is after a lowercase letter or a digit and before a
/// letter. Everywhere else a `_` separates them, so `version 2` becomes
/// `Version_2` (distinct from `Version2`) and `a-b` becomes `A_B`. The
/// conversion is idempotent.
///
/// # Examples
///
/// ```
/// use bemtype_core::case::to_pascal_case;
///
/// assert_eq!(to_pascal_case("foo-bar"), "FooBar");
/// assert_eq!(to_pascal_case("fooBlock"), "FooBlock");
/// assert_eq!(to_pascal_case("version 2"), "Version_2");
/// assert_eq!(to_pascal_case("a-b"), "A_B");
/// ```
pub fn to_pascal_case(input: &str) -> String {
    let mut out = String::new();
    for word in split_words(input) {
        push_pascal_word(&mut out, &word);
    }
    out
}

fn push_pascal_word(out: &mut String, word: &str) {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return;
    };
    let first = capitalize(first);

    if let Some(last) = out.chars().next_back() {
        // A lowercase letter or digit before a letter reads back as a boundary.
        let boundary = (last.is_lowercase() || last.is_numeric()) && !first.is_numeric();
        if !boundary {
            out.push('_');
        }
    }

    out.push(first);
    out.extend(
        chars
            .flat_map(char::to_lowercase)
            .filter(|ch| ch.is_alphanumeric()),
    );
}

/// Uppercase form of `ch` when it is a single character, else `ch` itself.
fn capitalize(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// Uppercase letters that have a distinct lowercase form.
///
/// Letters without a lowercase mapping (mathematical capitals, for example)
/// survive lowercasing unchanged and therefore never start a word.
fn is_upper(ch: char) -> bool {
    ch.is_uppercase() && ch.to_lowercase().ne(std::iter::once(ch))
}

/// Split an identifier into its words.
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (idx, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() && is_upper(ch) {
            // `current` is non-empty, so the previous char is alphanumeric.
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|next| next.is_lowercase());
            let boundary =
                prev.is_lowercase() || prev.is_numeric() || (is_upper(prev) && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
