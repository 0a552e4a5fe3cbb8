//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every flag is additionally gated by `cfg(debug_assertions)`
//! at the call site.

pub struct DebugFlags {
    /// Log every decoded record of each snapshot.
    pub print_snapshot_records: bool,
    /// Log each raw transport frame as it arrives.
    pub print_transport_frames: bool,
    /// Log how long each snapshot took to build and swap in.
    pub print_render_timing: bool,
    /// Log every label replacement.
    pub print_label_updates: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_snapshot_records: false,
    print_transport_frames: false,
    print_render_timing: true,
    print_label_updates: false,
};
