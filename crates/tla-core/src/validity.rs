// Code validity rule
//
// A code c0 c1 c2 is valid for a name when, after removing spaces:
// - c0 is matched at its first occurrence, and that position is consumed;
// - c1 is matched at its first occurrence in the rest of the name;
// - c2 does not occur in the rest of the name before c1's match;
// - c2 occurs strictly after c1's match.
//
// So every code letter takes its own position, and the lookup for the next
// letter may not cross an earlier occurrence of the letter after it.

/// Check whether `code` is a valid three-letter code for `name`.
///
/// Total over all strings: a code that is not exactly three alphabetic
/// characters (wrong length, digits, spaces, punctuation) is simply invalid.
/// Spaces in `name` are ignored.
pub fn is_valid_code(name: &str, code: &str) -> bool {
    let mut chars = code.chars();
    let (Some(first), Some(second), Some(third), None) =
        (chars.next(), chars.next(), chars.next(), chars.next())
    else {
        return false;
    };
    if ![first, second, third].iter().all(|c| c.is_alphabetic()) {
        return false;
    }

    let letters: Vec<char> = name.chars().filter(|&c| c != ' ').collect();

    let Some(anchor) = find(&letters, first) else {
        return false;
    };
    // The anchor is consumed: later letters are searched after it.
    let window = &letters[anchor + 1..];

    let Some(middle) = find(window, second) else {
        return false;
    };
    if find(window, third).is_some_and(|last| last < middle) {
        return false;
    }

    window[middle + 1..].contains(&third)
}

fn find(haystack: &[char], needle: char) -> Option<usize> {
    haystack.iter().position(|&c| c == needle)
}
