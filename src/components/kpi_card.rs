use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TrendType {
    Up,
    Down,
    Neutral,
}

impl TrendType {
    pub fn icon(&self) -> &'static str {
        match self {
            TrendType::Up => "▲",
            TrendType::Down => "▼",
            TrendType::Neutral => "●",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TrendType::Up => "trend-up",
            TrendType::Down => "trend-down",
            TrendType::Neutral => "trend-neutral",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CardColor {
    Green,
    Red,
    Blue,
    Yellow,
}

impl CardColor {
    pub fn css_class(&self) -> &'static str {
        match self {
            CardColor::Green => "kpi-green",
            CardColor::Red => "kpi-red",
            CardColor::Blue => "kpi-blue",
            CardColor::Yellow => "kpi-yellow",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct KpiCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub trend: Option<AttrValue>,
    #[prop_or(TrendType::Neutral)]
    pub trend_type: TrendType,
    #[prop_or(CardColor::Blue)]
    pub color: CardColor,
    #[prop_or(false)]
    pub loading: bool, // fetch en curso, el valor puede ser el anterior
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// El valor mostrado es de un fetch anterior al último error
    #[prop_or(false)]
    pub stale: bool,
}

/// Clases de estado de la tarjeta, además del color
pub fn state_classes(loading: bool, stale: bool, has_error: bool) -> Vec<&'static str> {
    [(loading, "loading"), (stale, "stale"), (has_error, "has-error")]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect()
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let card_classes = classes!(
        "kpi-card",
        props.color.css_class(),
        state_classes(props.loading, props.stale, props.error.is_some()),
    );

    html! {
        <div class={card_classes}>
            <div class="kpi-header">
                <span class="kpi-title">{props.title.clone()}</span>
                if props.loading {
                    <span class="kpi-spinner" aria-label="cargando">{"⏳"}</span>
                }
                if let Some(error) = &props.error {
                    <span class="kpi-error" title={error.clone()}>{"⚠️"}</span>
                }
            </div>
            <div class="kpi-value">{props.value.clone()}</div>
            if let Some(trend) = &props.trend {
                <div class={classes!("kpi-trend", props.trend_type.css_class())}>
                    <span class="trend-icon">{props.trend_type.icon()}</span>
                    <span class="trend-text">{trend.clone()}</span>
                </div>
            }
        </div>
    }
}

/// 1234567 → "1.234.567"
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
        assert_eq!(format_count(-4500), "-4.500");
    }

    #[test]
    fn format_percent_one_decimal() {
        assert_eq!(format_percent(75.0), "75.0%");
        assert_eq!(format_percent(3.333), "3.3%");
    }

    #[test]
    fn state_classes_follow_reading() {
        assert!(state_classes(false, false, false).is_empty());
        assert_eq!(state_classes(true, false, false), vec!["loading"]);
        assert_eq!(state_classes(false, true, true), vec!["stale", "has-error"]);
    }

    #[test]
    fn trend_and_color_classes() {
        assert_eq!(TrendType::Up.css_class(), "trend-up");
        assert_eq!(TrendType::Down.icon(), "▼");
        assert_eq!(CardColor::Yellow.css_class(), "kpi-yellow");
    }
}
