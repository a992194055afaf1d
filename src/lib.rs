//! Convenience functionality for working with nix flake installable
//! references: a flake reference plus an optional attribute path fragment,
//! following the installable grammar of the `nix` cli (including the
//! absolute attribute path notation introduced in Nix 2.19).
//!
//! The library is the pure core: splitting a flake uri into reference and
//! fragment, parsing and re-quoting attribute paths, rendering attribute
//! paths as nix expressions, and gating on the running nix version. It never
//! spawns processes, prints, or exits; that is the job of the accompanying
//! binary.

pub mod attr_path;
pub mod error;
pub mod expr;
pub mod fragment;
pub mod installable;
pub mod version;
