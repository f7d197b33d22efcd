use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomBounds;

pub(super) fn validate_zoom_bounds(bounds: ZoomBounds) -> TimelineResult<ZoomBounds> {
    if !bounds.min.is_finite() || !bounds.max.is_finite() || bounds.min > bounds.max {
        return Err(TimelineError::InvalidData(
            "zoom bounds `min`/`max` must be finite with min <= max".to_owned(),
        ));
    }
    if !bounds.step.is_finite() || bounds.step <= 0.0 {
        return Err(TimelineError::InvalidData(
            "zoom bounds `step` must be finite and > 0".to_owned(),
        ));
    }
    Ok(bounds)
}
