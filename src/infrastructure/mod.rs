//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: in-memory and SQLite document stores
//! - Export: XML serializer and zip archiver for scenario downloads
//! - HTTP: REST API routes
//! - WebSocket: live room data for table viewers
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod export;
pub mod http;
pub mod persistence;
pub mod state;
pub mod websocket;
