use crate::{ChartError, FigureSpec};

/// Renderer boundary: turns a figure description into an opaque renderable
/// artifact. Drawing backends live outside the core.
pub trait ChartRenderer {
    fn render(&self, figure: &FigureSpec) -> Result<String, ChartError>;
}

/// Pass-through renderer emitting the figure spec as JSON.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ChartRenderer for JsonRenderer {
    fn render(&self, figure: &FigureSpec) -> Result<String, ChartError> {
        if figure.datasets.is_empty() {
            return Err(ChartError::EmptyFigure);
        }

        let payload = if self.pretty {
            serde_json::to_string_pretty(figure)?
        } else {
            serde_json::to_string(figure)?
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dataset, DatasetKind, Point};

    fn figure(datasets: Vec<Dataset>) -> FigureSpec {
        FigureSpec {
            title: String::from("t"),
            x_label: String::from("x"),
            y_label: String::from("y"),
            datasets,
        }
    }

    #[test]
    fn renders_figure_as_json() {
        let spec = figure(vec![Dataset {
            label: String::from("Close"),
            kind: DatasetKind::Line,
            points: vec![Point {
                x: String::from("2024-01-02"),
                y: 10.0,
            }],
            bins: None,
        }]);

        let rendered = JsonRenderer::new().render(&spec).expect("render");
        assert!(rendered.contains("\"Close\""));
        assert!(rendered.contains("2024-01-02"));
    }

    #[test]
    fn rejects_figure_without_datasets() {
        let err = JsonRenderer::new()
            .render(&figure(Vec::new()))
            .expect_err("must fail");
        assert!(matches!(err, ChartError::EmptyFigure));
    }
}
