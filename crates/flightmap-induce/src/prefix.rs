/// Find a string prefix `P` with `digits == P + num` for every pair.
///
/// Returns `None` when any designator does not end with its callsign
/// number, when the leading remainders differ, or when the only common
/// remainder is empty (that case is already captured by the identity rate).
pub fn constant_prefix<I>(pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut prefix: Option<String> = None;
    for (num, digits) in pairs {
        let num = num.to_string();
        let digits = digits.to_string();
        let remainder = digits.strip_suffix(num.as_str())?;
        match &prefix {
            Some(existing) if existing != remainder => return None,
            Some(_) => {}
            None => prefix = Some(remainder.to_string()),
        }
    }
    prefix.filter(|p| !p.is_empty())
}
