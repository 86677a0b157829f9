pub mod a001_quota_origin;
pub mod a002_geo_area;
pub mod a003_workbasket_assignment;
