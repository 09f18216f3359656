pub mod a001_screw_press;
