//! Loading Placeholders
//!
//! Skeletons shaped like the review table, the stats cards and the property
//! page, shown while their data is on the way.

use leptos::*;

/// Columns in the review table
pub const TABLE_COLUMNS: usize = 8;

/// Placeholder bar width for a table cell, staggered so rows don't look identical
fn cell_width(row: usize, column: usize) -> &'static str {
    const WIDTHS: [&str; 4] = ["w-3/4", "w-1/2", "w-2/3", "w-1/3"];
    WIDTHS[(row + column) % WIDTHS.len()]
}

/// Stand-in for one stats card
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 animate-pulse">
            <div class="h-4 bg-gray-700 rounded w-1/3" />
            <div class="h-8 bg-gray-700 rounded w-1/4 mt-3" />
        </div>
    }
}

/// Table rows with one bar per review column
#[component]
pub fn ReviewRowsSkeleton(
    #[prop(default = 5)]
    rows: usize,
) -> impl IntoView {
    (0..rows)
        .map(|row| view! {
            <tr class="border-b border-gray-700 animate-pulse">
                {(0..TABLE_COLUMNS).map(|column| view! {
                    <td class="px-4 py-3">
                        <div class=format!("h-4 bg-gray-700 rounded {}", cell_width(row, column)) />
                    </td>
                }).collect_view()}
            </tr>
        })
        .collect_view()
}

/// Title, location and hero image of a property page
#[component]
pub fn PropertyHeaderSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            <div class="h-8 bg-gray-700 rounded w-1/2" />
            <div class="h-4 bg-gray-700 rounded w-1/4" />
            <div class="h-64 bg-gray-800 rounded-xl" />
        </div>
    }
}

/// Guest review cards: avatar, name line and comment lines
#[component]
pub fn ReviewCardsSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl p-5 border border-gray-700">
                    <div class="flex items-center space-x-3 mb-3">
                        <div class="w-10 h-10 rounded-full bg-gray-700" />
                        <div class="h-4 bg-gray-700 rounded w-1/4" />
                    </div>
                    <div class="h-3 bg-gray-700 rounded w-full mb-2" />
                    <div class="h-3 bg-gray-700 rounded w-5/6" />
                </div>
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_cells_differ() {
        for row in 0..3 {
            for column in 0..TABLE_COLUMNS - 1 {
                assert_ne!(cell_width(row, column), cell_width(row, column + 1));
            }
            assert_ne!(cell_width(row, 0), cell_width(row + 1, 0));
        }
    }
}
