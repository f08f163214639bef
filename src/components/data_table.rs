use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DataTableProps {
    pub headers: Vec<AttrValue>,
    pub rows: Vec<Vec<AttrValue>>,
    pub visible_row_count: usize,
    /// Se emite al llegar al final del scroll; cargar más filas es cosa del llamador
    #[prop_or_default]
    pub on_reach_end: Option<Callback<()>>,
    #[prop_or_default]
    pub empty_message: Option<AttrValue>,
}

/// Las primeras `visible` filas
pub fn visible_rows<R>(rows: &[R], visible: usize) -> &[R] {
    &rows[..visible.min(rows.len())]
}

/// Mensaje de truncado, solo si hay más filas de las visibles
pub fn truncation_message(total: usize, visible: usize) -> Option<String> {
    (total > visible).then(|| format!("Mostrando {} de {} filas", visible, total))
}

/// Margen en px para considerar que el scroll llegó al final
const REACH_END_THRESHOLD: i32 = 8;

#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let shown = visible_rows(&props.rows, props.visible_row_count);
    let truncated = truncation_message(props.rows.len(), props.visible_row_count);

    let onscroll = {
        let cb = props.on_reach_end.clone();
        Callback::from(move |e: Event| {
            let Some(cb) = &cb else {
                return;
            };
            if let Some(el) = e.target_dyn_into::<Element>() {
                let remaining = el.scroll_height() - el.scroll_top() - el.client_height();
                if remaining <= REACH_END_THRESHOLD {
                    cb.emit(());
                }
            }
        })
    };

    html! {
        <div class="data-table-container" {onscroll}>
            <table class="data-table">
                <thead>
                    <tr>
                        { for props.headers.iter().map(|h| html! { <th>{h.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if shown.is_empty() {
                        <tr class="data-table-empty">
                            <td colspan={props.headers.len().max(1).to_string()}>
                                {props.empty_message.clone().unwrap_or_else(|| AttrValue::from("Sin datos"))}
                            </td>
                        </tr>
                    }
                    { for shown.iter().map(|row| html! {
                        <tr>
                            { for row.iter().map(|cell| html! { <td>{cell.clone()}</td> }) }
                        </tr>
                    }) }
                </tbody>
            </table>
            if let Some(message) = truncated {
                <div class="data-table-truncated">{message}</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn renders_min_of_visible_and_total() {
        for (total, visible) in [(0, 5), (3, 5), (5, 5), (12, 5), (12, 0)] {
            let data = rows(total);
            assert_eq!(visible_rows(&data, visible).len(), total.min(visible));
        }
    }

    #[test]
    fn keeps_first_rows_in_order() {
        let data = rows(12);
        assert_eq!(visible_rows(&data, 3), &[0, 1, 2]);
    }

    #[test]
    fn truncation_message_only_when_rows_hidden() {
        assert_eq!(truncation_message(5, 5), None);
        assert_eq!(truncation_message(3, 5), None);
        assert_eq!(truncation_message(0, 0), None);
        assert_eq!(
            truncation_message(12, 5),
            Some("Mostrando 5 de 12 filas".to_string())
        );
    }
}
