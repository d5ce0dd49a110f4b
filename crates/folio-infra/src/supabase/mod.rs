//! Supabase data backend.

pub mod client;

pub use client::SupabaseClient;
