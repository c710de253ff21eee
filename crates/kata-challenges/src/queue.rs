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

//! Queue simulations: a weight-limited bridge, feature deployments and a
//! priority printer.

use crate::error::{ChallengeError, TruckTooHeavyError, ensure_same_length};
use std::collections::VecDeque;

/// Returns the number of seconds until every truck has crossed the bridge.
///
/// Trucks enter in order, at most one per second, and each needs
/// `bridge_length` seconds to cross. The total weight on the bridge never
/// exceeds `max_weight`. A zero-length bridge behaves like a bridge of
/// length one.
///
/// # Errors
///
/// `TruckTooHeavy` if a single truck exceeds `max_weight`, since it could
/// never enter.
///
/// ```
/// use kata_challenges::queue::bridge_crossing_time;
///
/// assert_eq!(bridge_crossing_time(2, 10, &[7, 4, 5, 6]), Ok(8));
/// ```
pub fn bridge_crossing_time(
    bridge_length: usize,
    max_weight: u64,
    trucks: &[u64],
) -> Result<u64, ChallengeError> {
    if let Some((index, &weight)) = trucks.iter().enumerate().find(|&(_, &w)| w > max_weight) {
        return Err(TruckTooHeavyError {
            index,
            weight,
            max_weight,
        }
        .into());
    }

    let bridge_length = bridge_length.max(1);
    let mut bridge: VecDeque<u64> = std::iter::repeat_n(0, bridge_length).collect();
    let mut on_bridge = 0u64;
    let mut seconds = 0u64;

    for &truck in trucks {
        loop {
            seconds += 1;
            on_bridge -= bridge.pop_front().unwrap_or(0);
            if truck <= max_weight - on_bridge {
                bridge.push_back(truck);
                on_bridge += truck;
                break;
            }
            bridge.push_back(0);
        }
    }

    if trucks.is_empty() {
        return Ok(0);
    }
    // The last truck still has to drive the full length.
    Ok(seconds + bridge_length as u64)
}

/// Groups features into deployment batches and returns the batch sizes.
///
/// Feature `i` needs `ceil((100 - progress[i]) / speed[i])` days. A feature
/// that finishes early still waits for every feature before it, so it
/// ships with the first earlier feature that is not yet done.
///
/// # Errors
///
/// `LengthMismatch` if the slices differ in length, `ZeroSpeed` for a
/// speed of zero.
///
/// ```
/// use kata_challenges::queue::deployment_batches;
///
/// assert_eq!(deployment_batches(&[93, 30, 55], &[1, 30, 5]), Ok(vec![2, 1]));
/// ```
pub fn deployment_batches(progresses: &[u32], speeds: &[u32]) -> Result<Vec<usize>, ChallengeError> {
    ensure_same_length(progresses.len(), speeds.len())?;

    let mut batches: Vec<usize> = Vec::new();
    let mut batch_day: Option<u32> = None;

    for (index, (&progress, &speed)) in progresses.iter().zip(speeds).enumerate() {
        if speed == 0 {
            return Err(ChallengeError::ZeroSpeed { index });
        }
        let days = (100 - progress.min(100)).div_ceil(speed);
        match batch_day {
            Some(day) if days <= day => {
                if let Some(size) = batches.last_mut() {
                    *size += 1;
                }
            }
            _ => {
                batches.push(1);
                batch_day = Some(days);
            }
        }
    }
    Ok(batches)
}

/// Returns the 1-based turn at which the job at `location` gets printed.
///
/// The printer takes the front job; if any queued job has a higher
/// priority it goes to the back, otherwise it is printed.
///
/// # Errors
///
/// `IndexOutOfBounds` if `location` is not a valid job index.
///
/// ```
/// use kata_challenges::queue::print_order;
///
/// assert_eq!(print_order(&[2, 1, 3, 2], 2), Ok(1));
/// assert_eq!(print_order(&[1, 1, 9, 1, 1, 1], 0), Ok(5));
/// ```
pub fn print_order(priorities: &[u32], location: usize) -> Result<usize, ChallengeError> {
    if location >= priorities.len() {
        return Err(ChallengeError::IndexOutOfBounds {
            index: location,
            len: priorities.len(),
        });
    }

    let mut queue: VecDeque<(usize, u32)> = priorities.iter().copied().enumerate().collect();
    let mut printed = 0;

    while let Some((index, priority)) = queue.pop_front() {
        if queue.iter().any(|&(_, other)| other > priority) {
            queue.push_back((index, priority));
            continue;
        }
        printed += 1;
        if index == location {
            return Ok(printed);
        }
    }

    // `location` is in bounds, so the job is printed before the queue drains.
    Err(ChallengeError::IndexOutOfBounds {
        index: location,
        len: priorities.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_examples() {
        assert_eq!(bridge_crossing_time(2, 10, &[7, 4, 5, 6]), Ok(8));
        assert_eq!(bridge_crossing_time(100, 100, &[10]), Ok(101));
        assert_eq!(bridge_crossing_time(100, 100, &[10; 10]), Ok(110));
    }

    #[test]
    fn test_bridge_without_trucks() {
        assert_eq!(bridge_crossing_time(5, 10, &[]), Ok(0));
    }

    #[test]
    fn test_bridge_rejects_heavy_truck() {
        assert_eq!(
            bridge_crossing_time(2, 10, &[3, 11]),
            Err(ChallengeError::TruckTooHeavy(TruckTooHeavyError {
                index: 1,
                weight: 11,
                max_weight: 10
            }))
        );
    }

    #[test]
    fn test_bridge_one_at_a_time() {
        // Each truck fills the bridge, so they cross back to back.
        assert_eq!(bridge_crossing_time(3, 5, &[5, 5]), Ok(7));
    }

    #[test]
    fn test_bridge_weight_limit_at_u64_max() {
        assert_eq!(bridge_crossing_time(2, u64::MAX, &[u64::MAX, 1]), Ok(5));
        assert_eq!(bridge_crossing_time(2, u64::MAX, &[u64::MAX - 1, 1]), Ok(4));
    }

    #[test]
    fn test_deployment_examples() {
        assert_eq!(deployment_batches(&[93, 30, 55], &[1, 30, 5]), Ok(vec![2, 1]));
        assert_eq!(
            deployment_batches(&[95, 90, 99, 99, 80, 99], &[1, 1, 1, 1, 1, 1]),
            Ok(vec![1, 3, 2])
        );
        assert_eq!(deployment_batches(&[], &[]), Ok(vec![]));
    }

    #[test]
    fn test_deployment_errors() {
        assert_eq!(
            deployment_batches(&[10, 20], &[1]),
            Err(ChallengeError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            deployment_batches(&[10, 20], &[1, 0]),
            Err(ChallengeError::ZeroSpeed { index: 1 })
        );
    }

    #[test]
    fn test_print_order_examples() {
        assert_eq!(print_order(&[2, 1, 3, 2], 2), Ok(1));
        assert_eq!(print_order(&[1, 1, 9, 1, 1, 1], 0), Ok(5));
        assert_eq!(print_order(&[4], 0), Ok(1));
    }

    #[test]
    fn test_print_order_rejects_bad_location() {
        assert_eq!(
            print_order(&[1, 2], 2),
            Err(ChallengeError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }
}
