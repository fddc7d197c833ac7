mod bar_chart;
mod config;
mod line_chart;
mod scatter;
mod session;

pub use bar_chart::{BarChartFrame, BarMark, genre_revenue_bars};
pub use config::{ChartConfig, Margin};
pub use line_chart::{LineChartFrame, LinePoint, LineSeries, yearly_line_chart};
pub use scatter::{BrushSelection, ScatterPlot, ScatterPoint};
pub use session::ChartSession;
