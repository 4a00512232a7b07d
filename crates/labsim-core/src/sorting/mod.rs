//! Sorting step generators.
//!
//! Each generator runs its algorithm over a private copy of the input and
//! records every compare / swap / write as a [`SortStep`]. Replaying the
//! recorded steps against the base array reproduces the algorithm's exact
//! intermediate states, which is what the visualizer animates.
//!
//! Comparison conventions are part of the recorded behavior and must not
//! change: bubble/selection/insertion act only on *strict* inequality (ties
//! record no swap or shift), merge is stable and left-biased, and quick
//! sort's compare steps always reference the pivot's original middle index
//! even after swaps have moved the pivot value elsewhere. The last one can
//! mislabel a comparison during playback; it is kept because changing it
//! would change the recorded step count users see.

use rand::Rng;

use labsim_types::{SortStep, StepTrace};

/// The supported sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// All algorithms, in display order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }
}

/// Generate the step trace for `algorithm` over `initial`. Pure: the
/// caller's slice is never mutated, and the same input always yields the
/// same trace.
pub fn generate_steps(algorithm: Algorithm, initial: &[u32]) -> StepTrace {
    let steps = match algorithm {
        Algorithm::Bubble => bubble_steps(initial),
        Algorithm::Selection => selection_steps(initial),
        Algorithm::Insertion => insertion_steps(initial),
        Algorithm::Merge => merge_steps(initial),
        Algorithm::Quick => quick_steps(initial),
    };
    StepTrace::new(initial.to_vec(), steps)
}

/// Apply one step to an array state. Compares change nothing.
pub fn apply_step(arr: &mut [u32], step: &SortStep) {
    match *step {
        SortStep::Compare { .. } => {}
        SortStep::Swap { i, j } => arr.swap(i, j),
        SortStep::Set { i, value } => arr[i] = value,
    }
}

/// Replay the first `k` steps from the base array. `k` is clamped to the
/// trace length. Replaying is how backward stepping works: the state after
/// `p - 1` actions is rebuilt from scratch.
pub fn replay(trace: &StepTrace, k: usize) -> Vec<u32> {
    let mut arr = trace.base.clone();
    for step in trace.steps.iter().take(k) {
        apply_step(&mut arr, step);
    }
    arr
}

/// Random array for a fresh visualizer card: `n` values in `[5, max + 5)`
pub fn random_array<R: Rng>(rng: &mut R, n: usize, max: u32) -> Vec<u32> {
    (0..n).map(|_| rng.gen_range(0..max) + 5).collect()
}

fn bubble_steps(initial: &[u32]) -> Vec<SortStep> {
    let mut arr = initial.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    if n < 2 {
        return steps;
    }
    for pass in 0..n - 1 {
        for i in 0..n - 1 - pass {
            steps.push(SortStep::Compare { i, j: i + 1 });
            if arr[i] > arr[i + 1] {
                steps.push(SortStep::Swap { i, j: i + 1 });
                arr.swap(i, i + 1);
            }
        }
    }
    steps
}

fn selection_steps(initial: &[u32]) -> Vec<SortStep> {
    let mut arr = initial.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    if n < 2 {
        return steps;
    }
    for i in 0..n - 1 {
        let mut min_idx = i;
        for j in i + 1..n {
            // compares are logged against the running minimum's position
            steps.push(SortStep::Compare { i: min_idx, j });
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            steps.push(SortStep::Swap { i, j: min_idx });
            arr.swap(i, min_idx);
        }
    }
    steps
}

fn insertion_steps(initial: &[u32]) -> Vec<SortStep> {
    let mut arr = initial.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    for i in 1..n {
        let key = arr[i];
        let mut j = i as isize - 1;
        steps.push(SortStep::Compare {
            i: j as usize,
            j: i,
        });
        while j >= 0 && arr[j as usize] > key {
            // shift right via a write, never a swap
            steps.push(SortStep::Set {
                i: (j + 1) as usize,
                value: arr[j as usize],
            });
            arr[(j + 1) as usize] = arr[j as usize];
            j -= 1;
            if j >= 0 {
                steps.push(SortStep::Compare {
                    i: j as usize,
                    j: i,
                });
            }
        }
        steps.push(SortStep::Set {
            i: (j + 1) as usize,
            value: key,
        });
        arr[(j + 1) as usize] = key;
    }
    steps
}

fn merge_steps(initial: &[u32]) -> Vec<SortStep> {
    fn merge_sort(arr: &mut Vec<u32>, steps: &mut Vec<SortStep>, l: usize, r: usize) {
        if r - l <= 1 {
            return;
        }
        let m = (l + r) / 2;
        merge_sort(arr, steps, l, m);
        merge_sort(arr, steps, m, r);

        // merge [l, m) and [m, r); left-biased on ties for stability
        let mut temp = Vec::with_capacity(r - l);
        let (mut i, mut j) = (l, m);
        while i < m || j < r {
            if j >= r || (i < m && arr[i] <= arr[j]) {
                temp.push(arr[i]);
                i += 1;
            } else {
                temp.push(arr[j]);
                j += 1;
            }
        }
        // every merged position write is a visible step
        for (k, &value) in temp.iter().enumerate() {
            steps.push(SortStep::Set { i: l + k, value });
            arr[l + k] = value;
        }
    }

    let mut arr = initial.to_vec();
    let mut steps = Vec::new();
    let n = arr.len();
    merge_sort(&mut arr, &mut steps, 0, n);
    steps
}

fn quick_steps(initial: &[u32]) -> Vec<SortStep> {
    fn qsort(arr: &mut Vec<u32>, steps: &mut Vec<SortStep>, l: isize, r: isize) {
        if l >= r {
            return;
        }
        let mid = ((l + r) / 2) as usize;
        let pivot = arr[mid];
        let (mut i, mut j) = (l, r);
        while i <= j {
            while arr[i as usize] < pivot {
                // logged against the pivot's original middle index (quirk
                // preserved, see module docs)
                steps.push(SortStep::Compare {
                    i: i as usize,
                    j: mid,
                });
                i += 1;
            }
            while arr[j as usize] > pivot {
                steps.push(SortStep::Compare {
                    i: mid,
                    j: j as usize,
                });
                j -= 1;
            }
            if i <= j {
                steps.push(SortStep::Swap {
                    i: i as usize,
                    j: j as usize,
                });
                arr.swap(i as usize, j as usize);
                i += 1;
                j -= 1;
            }
        }
        if l < j {
            qsort(arr, steps, l, j);
        }
        if i < r {
            qsort(arr, steps, i, r);
        }
    }

    let mut arr = initial.to_vec();
    let mut steps = Vec::new();
    let n = arr.len() as isize;
    if n > 1 {
        qsort(&mut arr, &mut steps, 0, n - 1);
    }
    steps
}
