//! Comma-separated argument lists.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

/// Split `list` on `,`, skipping empty entries.
///
/// Works on raw bytes so entries that are not valid UTF-8 survive untouched.
pub(crate) fn split_list(list: &OsStr) -> impl Iterator<Item = &OsStr> {
    list.as_bytes()
        .split(|&b| b == b',')
        .filter(|entry| !entry.is_empty())
        .map(OsStr::from_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_empty_entries() {
        let entries: Vec<&OsStr> = split_list(OsStr::new(",a,,b,")).collect();
        assert_eq!(entries, vec![OsStr::new("a"), OsStr::new("b")]);
    }

    #[test]
    fn test_split_keeps_non_utf8_bytes() {
        let list = OsStr::from_bytes(b"a,c\xff,b");
        let entries: Vec<&[u8]> = split_list(list).map(OsStr::as_bytes).collect();
        assert_eq!(entries, vec![&b"a"[..], &b"c\xff"[..], &b"b"[..]]);
    }
}
