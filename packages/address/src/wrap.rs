//! Street wrapping for printed labels.

use textwrap::{wrap, Options, WordSeparator, WordSplitter, WrapAlgorithm};

use crate::config::MAX_STREET_LENGTH;

/// Wrap a street to lines of at most `max_length` characters.
///
/// Wrapping is greedy on space boundaries; a single word longer than
/// `max_length` is broken mid-word. The result always has at least one
/// element, even for an empty street.
pub fn wrap_street(street: &str, max_length: usize) -> Vec<String> {
    let options = Options::new(max_length)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);

    wrap(street, &options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Wrap a street to the label line limit, [`MAX_STREET_LENGTH`].
pub fn street_parts(street: &str) -> Vec<String> {
    wrap_street(street, MAX_STREET_LENGTH)
}
