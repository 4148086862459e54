pub mod area_series;
pub mod daily_clicks;
pub mod locator;
pub mod monotone_curve;
pub mod primitives;
pub mod scale;
pub mod scale_mapping;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use area_series::{AreaGeometry, project_area_geometry};
pub use daily_clicks::{DailyClickCount, TREND_WINDOW_DAYS, seven_day_series};
pub use locator::{locate, locate_index};
pub use monotone_curve::{PathCommand, monotone_path};
pub use scale::LinearScale;
pub use scale_mapping::{ScaleMapping, build_scales};
pub use time_scale::TimeScale;
pub use types::{MIN_VIEWPORT_PX, Margin, Sample, SampleSeries, SeriesId, Viewport};
pub use value_scale::{VALUE_DOMAIN_FLOOR, VALUE_HEADROOM_RATIO, ValueScale, value_domain_upper};
