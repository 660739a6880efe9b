//! Snippet fixtures
//!
//! Small Python programs with a known expected label.

/// Two-line iterative binary search core
pub const BINARY_SEARCH_CORE: &str = "while left <= right:\n    mid = (left + right) // 2\n";

pub const ITERATIVE_BINARY_SEARCH: &str = r#"
def search(arr, target):
    low, high = 0, len(arr) - 1
    while low <= high:
        mid = (low + high) // 2
        if arr[mid] == target:
            return mid
        elif arr[mid] < target:
            low = mid + 1
        else:
            high = mid - 1
    return -1
"#;

pub const FIBONACCI: &str = r#"
def fib(n):
    if n <= 1:
        return n
    return fib(n - 1) + fib(n - 2)
"#;

pub const MERGE_SORT: &str = r#"
def merge_sort(arr):
    if len(arr) <= 1:
        return arr
    mid = len(arr) // 2
    left = merge_sort(arr[:mid])
    right = merge_sort(arr[mid:])
    return merge(left, right)
"#;

pub const QUICK_SORT: &str = r#"
def quick_sort(arr, lo, hi):
    if lo < hi:
        p = partition(arr, lo, hi)
        quick_sort(arr, lo, p - 1)
        quick_sort(arr, p + 1, hi)
"#;

pub const RECURSIVE_BINARY_SEARCH: &str = r#"
def bsearch(arr, target, lo, hi):
    if lo > hi:
        return -1
    mid = (lo + hi) // 2
    if arr[mid] == target:
        return mid
    if arr[mid] < target:
        lo = mid + 1
    else:
        hi = mid - 1
    return bsearch(arr, target, lo, hi)
"#;

pub const SEQUENTIAL_LOOPS: &str = r#"
for i in range(n):
    a += i
for j in range(n):
    b += j
"#;

pub const NESTED_LOOPS: &str = r#"
for i in range(n):
    for j in range(n):
        total += i * j
"#;

pub const MEMBERSHIP_IN_LOOP: &str = r#"
def has_duplicates(items):
    seen = []
    for item in items:
        if item in seen:
            return True
        seen.append(item)
    return False
"#;

pub const SORT_INSIDE_LOOPS: &str = r#"
for row in grid:
    for cell in row:
        cell.values.sort()
"#;

pub const COMPREHENSION_ONLY: &str = "squares = [x * x for x in data]\n";

pub const STRAIGHT_LINE: &str = r#"
def area(w, h):
    return w * h
"#;

/// `depth` loops, each nested in the previous one
pub fn fixture_nested_loops(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("{}for v{level} in range(n):\n", "    ".repeat(level)))
        .chain(std::iter::once(format!("{}total += 1\n", "    ".repeat(depth))))
        .collect()
}

/// `count` loops at the top level, one after another
pub fn fixture_sequential_loops(count: usize) -> String {
    (0..count)
        .map(|i| format!("for v{i} in range(n):\n    total += v{i}\n"))
        .collect()
}
