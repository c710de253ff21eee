// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::error::ChallengeError;
use rustc_hash::FxHashSet;

/// Capitalizes the first character of every space separated word and
/// lower-cases the rest. Runs of spaces are kept as they are.
///
/// ```
/// use kata_challenges::strings::jaden_case;
///
/// assert_eq!(jaden_case("3people unFollowed me"), "3people Unfollowed Me");
/// ```
pub fn jaden_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = c == ' ';
    }
    out
}

/// Plays the word chain game and returns the `(player, turn)` of the first
/// player to break it, both 1-based, or `None` if nobody does.
///
/// Players take turns in order. A word breaks the chain when it was said
/// before or does not start with the last character of the previous word.
///
/// # Errors
///
/// `NoPlayers` if `players` is zero.
///
/// ```
/// use kata_challenges::strings::word_chain_loser;
///
/// let words = ["hello", "one", "even", "never", "now", "world", "draw"];
/// assert_eq!(word_chain_loser(2, &words), Ok(Some((1, 3))));
/// ```
pub fn word_chain_loser(
    players: usize,
    words: &[&str],
) -> Result<Option<(usize, usize)>, ChallengeError> {
    if players == 0 {
        return Err(ChallengeError::NoPlayers);
    }

    let mut said: FxHashSet<&str> = FxHashSet::default();
    let mut previous: Option<&str> = None;

    for (index, &word) in words.iter().enumerate() {
        let breaks_chain = match previous {
            Some(prev) => prev.chars().last() != word.chars().next(),
            None => false,
        };
        if breaks_chain || !said.insert(word) {
            return Ok(Some((index % players + 1, index / players + 1)));
        }
        previous = Some(word);
    }
    Ok(None)
}
