//! Page generation modules for the public site
//!
//! This module organizes HTML page generators by page type (home, area
//! list, area detail, work detail, document list, lab). Each page module
//! handles its specific view logic and utilizes shared components from
//! the components module.

pub mod area_detail;
pub mod areas;
pub mod documentos;
pub mod home;
pub mod laboratorio;
pub mod trabajo_detail;
