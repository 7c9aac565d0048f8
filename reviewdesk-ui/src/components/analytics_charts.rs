//! Analytics Charts Component
//!
//! Rating, channel and sentiment breakdowns drawn as CSS bars.

use leptos::*;
use reviewdesk::Analytics;

/// Three bar charts side by side
#[component]
pub fn AnalyticsCharts(
    #[prop(into)]
    analytics: Signal<Analytics>,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <ChartCard title="Rating Distribution">
                {move || analytics.with(|a| {
                    a.rating_distribution
                        .iter()
                        .map(|bucket| view! {
                            <Bar
                                label=format!("{} ★", bucket.rating)
                                value=bucket.count.to_string()
                                percent=bucket.percentage
                                color="bg-yellow-400"
                            />
                        })
                        .collect_view()
                })}
            </ChartCard>

            <ChartCard title="Reviews by Channel">
                {move || analytics.with(|a| {
                    let total: u32 = a.source_distribution.iter().map(|s| s.count).sum();
                    a.source_distribution
                        .iter()
                        .map(|source| view! {
                            <Bar
                                label=source.source.clone()
                                value=source.count.to_string()
                                percent=share(source.count, total)
                                color="bg-primary-500"
                            />
                        })
                        .collect_view()
                })}
            </ChartCard>

            <ChartCard title="Sentiment">
                {move || analytics.with(|a| {
                    a.sentiment
                        .iter()
                        .map(|slice| view! {
                            <Bar
                                label=slice.label.clone()
                                value=format!("{:.0}%", slice.value)
                                percent=slice.value
                                color=sentiment_color(&slice.label)
                            />
                        })
                        .collect_view()
                })}
            </ChartCard>
        </div>
    }
}

/// Percentage of `count` in `total`, 0 when there is nothing to share
fn share(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn sentiment_color(label: &str) -> &'static str {
    match label.to_ascii_lowercase().as_str() {
        "positive" => "bg-green-500",
        "neutral" => "bg-gray-400",
        _ => "bg-red-500",
    }
}

#[component]
fn ChartCard(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            <div class="space-y-3">{children()}</div>
        </section>
    }
}

#[component]
fn Bar(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    percent: f64,
    color: &'static str,
) -> impl IntoView {
    let width = format!("width: {:.1}%", percent.clamp(0.0, 100.0));

    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span class="text-gray-300">{label}</span>
                <span class="text-gray-400">{value}</span>
            </div>
            <div class="h-2 bg-gray-700 rounded-full">
                <div class=format!("h-2 rounded-full {}", color) style=width />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share() {
        assert_eq!(share(0, 0), 0.0);
        assert_eq!(share(1, 4), 25.0);
    }

    #[test]
    fn test_sentiment_color() {
        assert_eq!(sentiment_color("Positive"), "bg-green-500");
        assert_eq!(sentiment_color("Neutral"), "bg-gray-400");
        assert_eq!(sentiment_color("Negative"), "bg-red-500");
    }
}
