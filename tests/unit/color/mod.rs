mod hue;
