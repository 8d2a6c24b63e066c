use crate::error::{Error, Result};

/// Rewrite every class name embedded in a field or method descriptor.
///
/// `map` receives internal names (`a/b/C`) and returns the replacement internal name, or `None`
/// to keep the original.
pub fn remap_descriptor<F>(desc: &str, mut map: F) -> Result<String>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(desc.len());
    let mut rest = desc;

    while let Some(start) = rest.find('L') {
        out.push_str(&rest[..=start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find(';') else {
            return Err(Error::InvalidDescriptor(desc.to_string()));
        };

        let class_name = &after[..end];
        match map(class_name) {
            Some(mapped) => out.push_str(&mapped),
            None => out.push_str(class_name),
        }
        out.push(';');
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
