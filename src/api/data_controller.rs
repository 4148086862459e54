use chrono::{NaiveDate, TimeZone};
use tracing::debug;

use crate::core::{DailyClickCount, Sample, SampleSeries, SeriesId, seven_day_series};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;
use super::invalidation::InvalidationTopic;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the sample series.
    ///
    /// Rebuilds the scales. A series with a new identity hides the tooltip,
    /// since its anchor pointed into the old samples.
    pub fn set_samples(&mut self, series: SampleSeries) {
        debug!(
            series = series.id().get(),
            count = series.len(),
            "set samples"
        );
        self.series = series;
        if self.tooltip.sync_series(self.series.id()) {
            self.invalidation.insert(InvalidationTopic::Tooltip);
        }
        self.rebuild_scales();
        self.invalidation.insert(InvalidationTopic::Data);
    }

    /// Validates and replaces the samples from a plain vector.
    pub fn set_sample_vec(&mut self, samples: Vec<Sample>) -> ChartResult<()> {
        let series = SampleSeries::new(samples)?;
        self.set_samples(series);
        Ok(())
    }

    /// Replaces the samples with the seven-day click trend ending at `today`.
    pub fn set_daily_clicks<Tz: TimeZone>(
        &mut self,
        today: NaiveDate,
        daily: &[DailyClickCount],
        tz: &Tz,
    ) -> ChartResult<()> {
        let series = seven_day_series(today, daily, tz)?;
        self.set_samples(series);
        Ok(())
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        self.series.samples()
    }

    #[must_use]
    pub fn series_id(&self) -> SeriesId {
        self.series.id()
    }
}
