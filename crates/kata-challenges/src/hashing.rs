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

//! Hash map exercises.

use crate::error::{ChallengeError, ensure_same_length};
use kata_core::num::ops::checked_arithmetic::CheckedMulVal;
use kata_sort::merge_sort_by;
use rustc_hash::{FxHashMap, FxHashSet};

/// Returns `true` if no entry of `numbers` is a prefix of another entry.
///
/// Two equal entries count as prefixes of each other.
///
/// ```
/// use kata_challenges::hashing::is_prefix_free;
///
/// assert!(is_prefix_free(&["123", "456", "789"]));
/// assert!(!is_prefix_free(&["119", "97674223", "1195524421"]));
/// ```
pub fn is_prefix_free(numbers: &[&str]) -> bool {
    let known: FxHashSet<&str> = numbers.iter().copied().collect();
    if known.len() != numbers.len() {
        return false;
    }
    !numbers.iter().any(|number| {
        number
            .char_indices()
            .skip(1)
            .any(|(end, _)| known.contains(&number[..end]))
    })
}

/// Counts the outfits that wear at most one item per category and at
/// least one item overall. Items are `(name, category)`.
///
/// Saturates at `u64::MAX`.
pub fn outfit_combinations(clothes: &[(&str, &str)]) -> u64 {
    let mut per_category: FxHashMap<&str, u64> = FxHashMap::default();
    for &(_, category) in clothes {
        *per_category.entry(category).or_insert(0) += 1;
    }
    per_category
        .values()
        .try_fold(1u64, |acc, &count| acc.checked_mul_val(count + 1))
        .map_or(u64::MAX, |product| product - 1)
}

#[derive(Debug, Clone)]
struct GenreEntry {
    first_index: usize,
    total_plays: u64,
    songs: Vec<usize>,
}

/// Picks the songs for a best-of album.
///
/// Genres are ordered by total plays, most played first. From each genre
/// at most two songs are taken, most played first, with the lower index
/// winning ties. Genres with equal totals keep their order of first
/// appearance.
///
/// # Errors
///
/// `LengthMismatch` if `genres` and `plays` differ in length.
///
/// ```
/// use kata_challenges::hashing::best_album;
///
/// let genres = ["classic", "pop", "classic", "classic", "pop"];
/// let plays = [500, 600, 150, 800, 2500];
/// assert_eq!(best_album(&genres, &plays), Ok(vec![4, 1, 3, 0]));
/// ```
pub fn best_album(genres: &[&str], plays: &[u32]) -> Result<Vec<usize>, ChallengeError> {
    ensure_same_length(genres.len(), plays.len())?;

    let mut by_genre: FxHashMap<&str, GenreEntry> = FxHashMap::default();
    for (index, (&genre, &play)) in genres.iter().zip(plays).enumerate() {
        let entry = by_genre.entry(genre).or_insert_with(|| GenreEntry {
            first_index: index,
            total_plays: 0,
            songs: Vec::new(),
        });
        entry.total_plays += u64::from(play);
        entry.songs.push(index);
    }

    let mut entries: Vec<GenreEntry> = by_genre.into_values().collect();
    merge_sort_by(&mut entries, |a, b| {
        b.total_plays
            .cmp(&a.total_plays)
            .then(a.first_index.cmp(&b.first_index))
    });

    let mut album = Vec::with_capacity(entries.len() * 2);
    for mut entry in entries {
        merge_sort_by(&mut entry.songs, |&a, &b| plays[b].cmp(&plays[a]).then(a.cmp(&b)));
        album.extend(entry.songs.into_iter().take(2));
    }
    Ok(album)
}
