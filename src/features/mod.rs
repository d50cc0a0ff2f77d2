pub mod sinkholes;
