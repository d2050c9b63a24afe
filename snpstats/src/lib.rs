#[cfg(feature = "core")]
#[doc(inline)]
pub use snpstats_core as core;

#[cfg(feature = "remaf")]
#[doc(inline)]
pub use snpstats_remaf as remaf;

#[cfg(feature = "bins")]
#[doc(inline)]
pub use snpstats_bins as bins;
