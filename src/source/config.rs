pub struct Config {
    /// Nested route document, one object per bus with its stops embedded.
    pub routes_file_name: String,
    pub buses_file_name: String,
    pub stops_file_name: String,
    pub bus_routes_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routes_file_name: "routes.json".into(),
            buses_file_name: "buses.csv".into(),
            stops_file_name: "bus_stops.csv".into(),
            bus_routes_file_name: "bus_routes.csv".into(),
        }
    }
}
