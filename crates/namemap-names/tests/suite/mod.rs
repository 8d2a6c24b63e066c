mod custom_view;
mod nested_names;
