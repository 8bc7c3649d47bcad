//! # gilt-inspector
//!
//! A live widget-tree inspector for CSS-styled terminal UIs.
//!
//! The inspector docks a panel on the right edge of the screen that mirrors
//! the running application's widget tree. Hovering a row highlights the live
//! widget behind it; selecting a row loads the widget's identifier, classes
//! and own style into the panel, where the identifier and classes can be
//! edited in place. Two resize bars adjust the panel's width and the height of
//! its tab area.
//!
//! ## Core Systems
//!
//! - **[`inspector`]**: the panel, mirror tree builder, hover highlighter, layout
//! - **[`widgets`]**: mirror tree, resize bars, text fields, style viewer, tabs
//! - **[`dom`]**: slotmap-backed widget arena with named-child indexes and batched updates
//! - **[`css`]**: inline-style parser, identifier syntax, global rule registry
//! - **[`event`]**: input events, inspector events, key bindings, pointer capture
//! - **[`validation`]**: field validators
//! - **[`render`]**: strips and the compositor
//! - **[`app`]**: application struct tying everything together
//! - **[`screen`]**: screen state with focus chain
//! - **[`geometry`]**: Offset, Size, Region, Axis primitives
//! - **[`testing`]**: headless Pilot and snapshot helpers

// Foundation
pub mod geometry;

// Core systems
pub mod css;
pub mod dom;
pub mod validation;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Application
pub mod app;
pub mod inspector;
pub mod screen;

// Testing
pub mod testing;
