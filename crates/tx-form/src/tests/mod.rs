mod skill_editor;
