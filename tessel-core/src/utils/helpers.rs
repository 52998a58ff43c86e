//! Generic searching helpers over ordered lists.

/// Find element relative to reference element.
///
/// eg. to get the next element, use `shift` 1,
/// to get the previous element, use `shift` -1.
///
/// ## Arguments
/// * `list` - The list to get the element from
/// * `reference_finder` - Predicate to find the reference element in the list
/// * `shift` - The shift (distance) of the element you try to find relative to the reference element, can be negative to move left
/// * `should_loop` - If the list should loop when the `shift` goes beyond the start/end of the list
///
/// ## Example
/// ```
/// let list = vec!["hello", "world", "foo", "bar"];
/// let result = tessel_core::utils::helpers::relative_find(&list, |&e| e == "world", 2, false);
/// assert_eq!(result, Some(&"bar"));
/// ```
pub fn relative_find<T, F>(
    list: &[T],
    reference_finder: F,
    shift: i32,
    should_loop: bool,
) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    let len = list.len() as i32;
    let reference_index = list.iter().position(reference_finder)?;
    let loops = if shift.is_negative() {
        // check if shift is larger than there are elements on the left
        shift.unsigned_abs() as usize > reference_index
    } else {
        // check if shift is larger than there are elements on the right
        shift as usize > len as usize - (reference_index + 1)
    };

    let relative_index = if loops && !should_loop {
        None
    } else {
        let shift = shift % len;
        let shifted_index = reference_index as i32 + shift;
        let max_index = len - 1;
        if shifted_index < 0 {
            Some((len + shifted_index) as usize)
        } else if shifted_index > max_index {
            Some((shifted_index - len) as usize)
        } else {
            Some(shifted_index as usize)
        }
    }?;

    list.get(relative_index)
}

/// Walk away from `reference` in the direction of `step` (forwards when positive) and return
/// the first element accepted by `accept`. The walk stops at the ends of the list.
///
/// ## Example
/// ```
/// let list = vec![1, 2, 3, 4, 5];
/// let result = tessel_core::utils::helpers::walk_from(&list, &3, 1, |&e| e % 2 == 1);
/// assert_eq!(result, Some(&5));
/// let result = tessel_core::utils::helpers::walk_from(&list, &1, -1, |_| true);
/// assert_eq!(result, None);
/// ```
pub fn walk_from<'a, T, F>(list: &'a [T], reference: &T, step: i32, accept: F) -> Option<&'a T>
where
    T: PartialEq,
    F: Fn(&T) -> bool,
{
    let index = list.iter().position(|e| e == reference)?;
    if step >= 0 {
        list[index + 1..].iter().find(|e| accept(e))
    } else {
        list[..index].iter().rev().find(|e| accept(e))
    }
}
