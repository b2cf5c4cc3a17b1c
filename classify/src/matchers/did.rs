// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use crate::parsed::Parsed;

/// `did:` + method name + `:` as the prefix, the method-specific id as the
/// core, and any trailing DID URL path/query as the suffix.
pub(crate) fn parse(token: &str) -> Option<Parsed> {
    if !token.is_ascii() {
        return None;
    }
    let rest = token.strip_prefix("did:")?;
    let colon = rest.find(':')?;
    let method = &rest[..colon];
    if method.is_empty()
        || !method
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return None;
    }
    let id_and_tail = &rest[colon + 1..];
    let id_len = method_specific_id_len(id_and_tail)?;
    let (id, tail) = id_and_tail.split_at(id_len);
    Some(Parsed::new(
        "DID",
        Some(format!("did:{}:", method)),
        id,
        if tail.is_empty() {
            None
        } else {
            Some(tail.to_string())
        },
    ))
}

/// Length of the leading run of `idchar` / pct-encoded triplets. The run
/// must be non-empty and anything after it must start a path (`/`) or
/// query (`?`).
fn method_specific_id_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-') {
            i += 1;
        } else if b == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return None;
            }
            i += 3;
        } else {
            break;
        }
    }
    if i == 0 {
        return None;
    }
    if i < bytes.len() && bytes[i] != b'/' && bytes[i] != b'?' {
        return None;
    }
    Some(i)
}
