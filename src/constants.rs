// ABOUTME: Application constants for conversion factors, response messages, and server defaults
// ABOUTME: Provides named constants to eliminate magic numbers and literals in handlers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Application constants and configuration values

/// Fixed conversion factors
pub mod factors {
    /// Approximate COP to USD exchange rate.
    ///
    /// Placeholder value: there is no live rate lookup, 1 COP is taken as 0.00025 USD.
    pub const COP_TO_USD_RATE: f64 = 0.000_25;

    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;

    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_62;

    /// Miles per hour for one kilometer per hour
    pub const MPH_PER_KMH: f64 = 0.621_371;
}

/// Decimal precision applied to conversion results
pub mod precision {
    /// Currency results keep four decimals
    pub const CURRENCY_DECIMALS: i32 = 4;

    /// Mass and speed results keep two decimals
    pub const MEASURE_DECIMALS: i32 = 2;
}

/// Unit labels returned in conversion responses
pub mod units {
    /// Colombian peso
    pub const COP: &str = "COP";
    /// US dollar
    pub const USD: &str = "USD";
    /// Meters
    pub const METERS: &str = "metros";
    /// Centimeters
    pub const CENTIMETERS: &str = "centímetros";
    /// Kilograms
    pub const KILOGRAMS: &str = "kilogramos";
    /// Pounds
    pub const POUNDS: &str = "libras";
    /// Kilometers per hour
    pub const KMH: &str = "km/h";
    /// Miles per hour
    pub const MPH: &str = "mph";
}

/// Fixed client-facing messages
pub mod messages {
    /// Amount missing, zero, or not numeric
    pub const INVALID_AMOUNT: &str = "Cantidad inválida";
    /// Any unexpected failure while converting
    pub const CONVERSION_FAILED: &str = "Error en la conversión";
    /// Unknown conversion slug
    pub const CONVERSION_NOT_FOUND: &str = "Conversión no encontrada";
    /// No route matches the request path
    pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";
    /// Health check message
    pub const HEALTHY: &str = "Servidor funcionando correctamente";
    /// Root metadata message
    pub const API_DESCRIPTION: &str = "API de conversión de unidades";
}

/// Service identity
pub mod service_names {
    /// Service name used in logs and metadata
    pub const UNIT_CONVERSION_SERVER: &str = "unit-conversion-server";
}

/// HTTP route paths
pub mod paths {
    /// API metadata listing
    pub const ROOT: &str = "/";
    /// Health check
    pub const HEALTH: &str = "/api/health";
    /// Prefix shared by every conversion endpoint
    pub const CONVERT_PREFIX: &str = "/api/convert";
}

/// Server defaults
pub mod defaults {
    /// Default bind host
    pub const HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 3001;
    /// Default environment label
    pub const ENVIRONMENT: &str = "development";
    /// Header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}
