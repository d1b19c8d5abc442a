//! Configuration register encoding.

use crate::config::{ComparatorLatching, ComparatorMode, ComparatorPolarity, ComparatorQueue};
use crate::registers::{CONFIG_DR_SHIFT, CONFIG_OS_SINGLE};
use crate::request::ReadPlan;

/// Pack a validated plan into the 16-bit configuration word.
///
/// Every field owns a disjoint bit range, so the OR order is irrelevant.
/// The start-conversion bit is always set: it triggers the one-shot
/// conversion in single-shot mode and is ignored in continuous mode.
/// Without a comparator block the comparator is left disabled with its
/// power-on settings.
pub fn control_word(plan: &ReadPlan) -> u16 {
    let (queue, latching, polarity, mode) = match plan.comparator {
        Some(c) => (c.queue, c.latching, c.polarity, c.mode),
        None => (
            ComparatorQueue::Disabled,
            ComparatorLatching::NonLatching,
            ComparatorPolarity::ActiveLow,
            ComparatorMode::Traditional,
        ),
    };

    queue.bits()
        | latching.bits()
        | polarity.bits()
        | mode.bits()
        | plan.mode.bits()
        | (plan.rate_code << CONFIG_DR_SHIFT)
        | plan.gain.bits()
        | plan.mux.bits()
        | CONFIG_OS_SINGLE
}
