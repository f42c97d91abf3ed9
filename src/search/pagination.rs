//! Page-button windowing for paged search results.
//!
//! Up to six pages are all shown. Beyond that the first three and last three
//! pages are shown while the current page sits in either group; otherwise
//! the first page, the current page with its neighbours, and the last page,
//! separated by dividers.

/// One slot in the pagination bar.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    Page { number: u32, current: bool },
    Divider,
}

impl PageButton {
    fn page(number: u32, current_page: u32) -> PageButton {
        PageButton::Page {
            number,
            current: number == current_page,
        }
    }
}

/// Buttons to render for `current_page` of `total_pages`.
///
pub fn page_buttons(current_page: u32, total_pages: u32) -> Vec<PageButton> {
    let page = |number| PageButton::page(number, current_page);

    if total_pages <= 6 {
        return (1..=total_pages).map(page).collect();
    }

    if current_page <= 3 || current_page >= total_pages - 2 {
        (1..=3)
            .map(page)
            .chain(std::iter::once(PageButton::Divider))
            .chain((total_pages - 2..=total_pages).map(page))
            .collect()
    } else {
        let mut buttons = vec![page(1), PageButton::Divider];
        buttons.extend((current_page - 1..=current_page + 1).map(page));
        buttons.push(PageButton::Divider);
        buttons.push(page(total_pages));
        buttons
    }
}

/// Page reached by "Previous", or `None` when disabled.
///
pub fn previous_page(current_page: u32) -> Option<u32> {
    (current_page > 1).then(|| current_page - 1)
}

/// Page reached by "Next", or `None` when disabled.
///
pub fn next_page(current_page: u32, total_pages: u32) -> Option<u32> {
    (current_page < total_pages).then(|| current_page + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(buttons: &[PageButton]) -> Vec<Option<u32>> {
        buttons
            .iter()
            .map(|button| match button {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Divider => None,
            })
            .collect()
    }

    fn current(buttons: &[PageButton]) -> Vec<u32> {
        buttons
            .iter()
            .filter_map(|button| match button {
                PageButton::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn few_pages_all_shown() {
        let buttons = page_buttons(3, 5);
        assert_eq!(
            numbers(&buttons),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
        assert_eq!(current(&buttons), vec![3]);

        assert_eq!(numbers(&page_buttons(1, 6)).len(), 6);
    }

    #[test]
    fn no_pages() {
        assert!(page_buttons(1, 0).is_empty());
    }

    #[test]
    fn current_page_at_start() {
        let buttons = page_buttons(1, 20);
        assert_eq!(
            numbers(&buttons),
            vec![Some(1), Some(2), Some(3), None, Some(18), Some(19), Some(20)]
        );
        assert_eq!(current(&buttons), vec![1]);
    }

    #[test]
    fn current_page_in_middle() {
        let buttons = page_buttons(10, 20);
        assert_eq!(
            numbers(&buttons),
            vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
        );
        assert_eq!(current(&buttons), vec![10]);
    }

    #[test]
    fn current_page_at_end() {
        let buttons = page_buttons(19, 20);
        assert_eq!(
            numbers(&buttons),
            vec![Some(1), Some(2), Some(3), None, Some(18), Some(19), Some(20)]
        );
        assert_eq!(current(&buttons), vec![19]);
    }

    #[test]
    fn window_boundaries() {
        assert_eq!(numbers(&page_buttons(3, 20))[3], None);
        assert_eq!(
            numbers(&page_buttons(4, 20)),
            vec![Some(1), None, Some(3), Some(4), Some(5), None, Some(20)]
        );
        assert_eq!(
            numbers(&page_buttons(17, 20)),
            vec![Some(1), None, Some(16), Some(17), Some(18), None, Some(20)]
        );
        assert_eq!(current(&page_buttons(18, 20)), vec![18]);
        assert_eq!(
            numbers(&page_buttons(4, 7)),
            vec![Some(1), None, Some(3), Some(4), Some(5), None, Some(7)]
        );
    }

    #[test]
    fn previous_and_next_bounds() {
        assert_eq!(previous_page(1), None);
        assert_eq!(previous_page(2), Some(1));
        assert_eq!(next_page(20, 20), None);
        assert_eq!(next_page(19, 20), Some(20));
        assert_eq!(next_page(1, 0), None);
    }
}
