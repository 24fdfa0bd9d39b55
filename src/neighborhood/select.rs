//! Best-candidate scan shared by the search drivers.

/// Linear scan for the best (lowest) value.
///
/// Starts from the first value; every later value that is less than *or
/// equal to* the running best replaces it. Among equal minima the **last**
/// one in generation order wins. Returns `(index, value)`, or `None` for an
/// empty input.
///
/// ```
/// use u_tardiness::neighborhood::scan_best;
///
/// assert_eq!(scan_best([5, 3, 4, 3]), Some((3, 3)));
/// assert_eq!(scan_best(Vec::<u64>::new()), None);
/// ```
pub fn scan_best<I>(values: I) -> Option<(usize, u64)>
where
    I: IntoIterator<Item = u64>,
{
    let mut iter = values.into_iter().enumerate();
    let mut best = iter.next()?;
    for (idx, value) in iter {
        if value <= best.1 {
            best = (idx, value);
        }
    }
    Some(best)
}
