use crate::error::InsertError;

pub(crate) fn detect_param_size(key: &str, old_pos: usize) -> usize {
    let rest_key = key.chars().skip(old_pos).collect::<String>();

    if let Some(pos) = rest_key.chars().position(|ch| ch == '/') {
        return old_pos + pos;
    }
    old_pos + rest_key.len()
}

/// Extracts a parameter name from a key that starts with `:`, stopping at
/// the next `/` or end of string. Used only to build an error message.
fn param_name(key: &str) -> String {
    key.chars().skip(1).take_while(|&c| c != '/').collect()
}

/// Tells whether `a` and `b` could be siblings rooted at the same first
/// character.
///
/// Both starting with `:` is only allowed when the two keys name the same
/// parameter up to the next `/`; disagreement there is the one case
/// insertion must refuse rather than silently create two differently-named
/// parameters at the same branching position (invariant 3, §3).
pub(crate) fn same_first_char(a: &str, b: &str) -> Result<bool, InsertError> {
    let a_first = a.chars().next();
    let b_first = b.chars().next();
    if a_first == Some(':') && b_first == Some(':') && !same_key(a, b) {
        return Err(InsertError::SharedKey {
            existing: param_name(b),
            incoming: param_name(a),
        });
    }
    Ok(a_first == b_first)
}

/// Compares *path* against *key* for differences until the
/// following criteria is met:
///
/// - End of *path* or *key* is reached.
/// - A separator (`/`) is found.
/// - A character between *path* or *key* differs
fn same_key(path: &str, key: &str) -> bool {
    let mut it = path
        .chars()
        .zip(key.chars())
        .skip_while(|&(p, k)| (p != '/') && (k != '/') && (p == k));

    match it.next() {
        Some((p, _k)) => p == '/',
        None => path.len() < key.len(),
    }
}

/// Allow inline comparison of *char* against 3 defined markers:
///
/// - Path separator (`/`)
/// - Named parameter (`:`)
/// - Catch all (`*`)
fn check_markers(ch: Option<char>) -> bool {
    ch == Some('/') || ch == Some(':') || ch == Some('*')
}

/// Compares *path* against *key* for equality until one of the
/// following criterias is met:
///
/// - End of *path* or *key* is reached.
/// - A separator (`/`) is found.
/// - A named parameter (`:`) or catch all (`*`) is found.
/// - A character in *path* differs from *key*
pub(crate) fn shared_key(path: &str, key: &str) -> bool {
    let key_first = key.chars().next();
    if path.chars().next() != key_first && check_markers(key_first) {
        return false;
    }

    let mut rest_path = path.chars();
    let mut rest_key = key.chars();

    loop {
        let p = rest_path.next();
        let k = rest_key.next();
        if p.is_none() || k.is_none() || check_markers(p) || check_markers(k) {
            return k.is_none() || check_markers(k);
        }
        if p != k {
            return false;
        }
    }
}

pub(crate) fn substring(target: &str, begin: usize, end: usize) -> String {
    target
        .chars()
        .skip(begin)
        .take(end - begin)
        .collect::<String>()
}

pub(crate) fn prefix(target: &str, end: usize) -> String {
    target.chars().take(end).collect::<String>()
}

pub(crate) fn suffix(target: &str, begin: usize) -> String {
    target.chars().skip(begin).collect::<String>()
}

pub(crate) fn has_trailing_slash(end: usize, size: usize, path: &str) -> bool {
    end + 1 == size && path.chars().nth(end) == Some('/')
}
