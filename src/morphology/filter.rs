//! Shrink, expand and denoise.
//!
//! All three slide the structuring element over the signal one position
//! at a time. The window at `idx` is `signal[idx..idx + step]`, cut short
//! at the end of the signal; the element is cut to the same length before
//! comparing.

/// Yields `(window, pattern)` pairs of equal length, one per signal index.
fn windows<'a>(
    signal: &'a [u8],
    element: &'a [u8],
) -> impl Iterator<Item = (&'a [u8], &'a [u8])> {
    let step = element.len();
    (0..signal.len()).map(move |idx| {
        let end = (idx + step).min(signal.len());
        let window = &signal[idx..end];
        (window, &element[..window.len()])
    })
}

/// Erode a binary signal.
///
/// Position `idx` is 1 when the window starting there equals the element
/// over their overlapping length, 0 otherwise.
///
/// ```
/// use drill_kit::morphology::shrink;
///
/// assert_eq!(shrink(&[1, 1, 1, 0, 0], &[1, 1]), vec![1, 1, 0, 0, 0]);
/// ```
#[must_use]
pub fn shrink(signal: &[u8], element: &[u8]) -> Vec<u8> {
    windows(signal, element)
        .map(|(window, pattern)| u8::from(window == pattern))
        .collect()
}

/// Dilate a binary signal.
///
/// Position `idx` is 1 when any position of the window equals the
/// corresponding element position. A 0 lining up with a 0 counts.
#[must_use]
pub fn expand(signal: &[u8], element: &[u8]) -> Vec<u8> {
    windows(signal, element)
        .map(|(window, pattern)| u8::from(window.iter().zip(pattern).any(|(a, b)| a == b)))
        .collect()
}

/// Shrink, then expand with the same element.
#[must_use]
pub fn denoise(signal: &[u8], element: &[u8]) -> Vec<u8> {
    let shrunk = shrink(signal, element);
    log::trace!("denoise: shrunk {:?}", shrunk);
    expand(&shrunk, element)
}
