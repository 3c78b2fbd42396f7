// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Fluent bundles are embedded at build time from `assets/i18n/`. The locale
//! is resolved from the CLI, then the config file, then the OS, falling back
//! to `en-US`. The widget uses it for its default alt text, the fallback
//! error message and the error details toggle.

pub mod fluent;
